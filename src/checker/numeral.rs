// WHY: Shared digit vocabulary for the width and 万 rules
// Digit sets are explicit: Unicode `\d` would also accept Arabic-Indic and other scripts

use serde::{Deserialize, Serialize};

/// Character class for one numeral run, in regex syntax
pub(crate) const DIGIT_CLASS: &str = "[0-9０-９]";

/// Which digit glyphs a numeral run is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumeralScript {
    /// Only ０-９
    FullWidth,
    /// Only 0-9
    HalfWidth,
    /// At least one of each
    Mixed,
}

/// Classification of a numeral run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralClass {
    /// Characters in the run, regardless of width
    pub digit_count: usize,
    pub script: NumeralScript,
}

pub fn is_half_width_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_full_width_digit(ch: char) -> bool {
    ('０'..='９').contains(&ch)
}

pub fn is_digit(ch: char) -> bool {
    is_half_width_digit(ch) || is_full_width_digit(ch)
}

/// Classify a numeral run
///
/// The caller passes a run made only of digits. Any other character is ignored
/// for script purposes but still counted, so keep runs clean. An empty run is
/// reported as half-width with zero digits.
pub fn classify(run: &str) -> NumeralClass {
    let mut digit_count = 0;
    let mut has_half = false;
    let mut has_full = false;

    for ch in run.chars() {
        digit_count += 1;
        if is_half_width_digit(ch) {
            has_half = true;
        } else if is_full_width_digit(ch) {
            has_full = true;
        }
    }

    let script = match (has_half, has_full) {
        (true, true) => NumeralScript::Mixed,
        (false, true) => NumeralScript::FullWidth,
        _ => NumeralScript::HalfWidth,
    };

    NumeralClass { digit_count, script }
}

/// Rewrite full-width digits as half-width into a new string
pub fn to_half_width(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    to_half_width_into(text, &mut result);
    result
}

/// Rewrite full-width digits as half-width into a supplied buffer
pub fn to_half_width_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());
    for ch in text.chars() {
        if is_full_width_digit(ch) {
            // ０ is U+FF10; the offset to ASCII '0' is fixed
            let value = ch as u32 - '０' as u32;
            buffer.push(char::from(b'0' + value as u8));
        } else {
            buffer.push(ch);
        }
    }
}

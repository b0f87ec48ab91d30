// WHY: Digit-width convention: one digit is written full-width, two or more half-width
// Mixed-width runs pass through here untouched; the 万 rule handles the ones it can see

use anyhow::{Context, Result};
use regex_automata::meta::Regex;

use super::numeral::{classify, NumeralScript, DIGIT_CLASS};
use super::{Finding, FindingKind, Span};

/// Flags numeral runs written in the wrong width for their length
pub struct WidthRuleEngine {
    /// Maximal run of digits from either width
    run_pattern: Regex,
}

impl WidthRuleEngine {
    pub fn new() -> Result<Self> {
        let pattern = format!("{DIGIT_CLASS}+");
        let run_pattern = Regex::new(&pattern)
            .with_context(|| format!("Failed to compile numeral run pattern {pattern}"))?;
        Ok(Self { run_pattern })
    }

    /// Scan the text left to right and flag each run that breaks the convention
    pub fn check(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for m in self.run_pattern.find_iter(text) {
            let run = &text[m.start()..m.end()];
            let class = classify(run);

            let message = match (class.digit_count, class.script) {
                (1, NumeralScript::HalfWidth) => {
                    format!("1桁の数字「{run}」は全角が望ましいです。")
                }
                (n, NumeralScript::FullWidth) if n >= 2 => {
                    format!("2桁以上の数字「{run}」は半角が望ましいです。")
                }
                _ => continue,
            };

            findings.push(Finding {
                kind: FindingKind::DigitWidthViolation,
                span: Span::new(m.start(), m.end()),
                text: run.to_string(),
                message,
                suggestion: Some(swap_width(run)),
            });
        }

        findings
    }
}

/// Flip every digit of a single-script run to the other width
fn swap_width(run: &str) -> String {
    run.chars()
        .map(|ch| match ch {
            '0'..='9' => char::from_u32(ch as u32 - '0' as u32 + '０' as u32).unwrap_or(ch),
            '０'..='９' => char::from_u32(ch as u32 - '０' as u32 + '0' as u32).unwrap_or(ch),
            other => other,
        })
        .collect()
}

// WHY: Numbers counted in 万 read better as kanji numerals in formal text
// Must see the original digits: width mixing is invisible once the text is normalized

use anyhow::{Context, Result};
use regex_automata::meta::Regex;
use std::collections::HashSet;

use super::numeral::{classify, to_half_width, NumeralScript, DIGIT_CLASS};
use super::{Finding, FindingKind, Span};

/// The 万 unit character
pub const MAN: char = '万';

/// Canned example used when the numeral reads 3
const EXAMPLE_THREE: &str = "三万";
/// Canned example for every other value; no real conversion is attempted
const EXAMPLE_GENERIC: &str = "十二万";

/// Flags `<digits>万` tokens, or asks for width unification when the digits mix widths
pub struct ManNotationRuleEngine {
    token_pattern: Regex,
}

impl ManNotationRuleEngine {
    pub fn new() -> Result<Self> {
        let pattern = format!("{DIGIT_CLASS}+{MAN}");
        let token_pattern = Regex::new(&pattern)
            .with_context(|| format!("Failed to compile 万 token pattern {pattern}"))?;
        Ok(Self { token_pattern })
    }

    pub fn check(&self, text: &str) -> Vec<Finding> {
        let mut seen = HashSet::new();
        let mut findings = Vec::new();
        self.scan_into(text, &mut seen, &mut findings);
        findings
    }

    /// Scan for tokens, skipping any span already present in `seen`
    ///
    /// Re-running a scan against the same `seen` set adds nothing.
    pub(crate) fn scan_into(&self, text: &str, seen: &mut HashSet<Span>, findings: &mut Vec<Finding>) {
        for m in self.token_pattern.find_iter(text) {
            let span = Span::new(m.start(), m.end());
            if !seen.insert(span) {
                continue;
            }
            findings.push(evaluate_token(&text[span.start..span.end], span));
        }
    }
}

fn evaluate_token(token: &str, span: Span) -> Finding {
    let numeral = token.strip_suffix(MAN).unwrap_or(token);
    let class = classify(numeral);

    if class.script == NumeralScript::Mixed {
        return Finding {
            kind: FindingKind::ManNotationViolation,
            span,
            text: token.to_string(),
            message: format!("「{token}」は全角と半角の数字が混在しています。表記を統一してください。"),
            suggestion: None,
        };
    }

    let example = if to_half_width(numeral) == "3" {
        EXAMPLE_THREE
    } else {
        EXAMPLE_GENERIC
    };

    Finding {
        kind: FindingKind::ManNotationViolation,
        span,
        text: token.to_string(),
        message: format!("「{token}」は漢数字での表記（例：{example}）が望ましいです。"),
        suggestion: Some(example.to_string()),
    }
}

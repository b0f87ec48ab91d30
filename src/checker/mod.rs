// WHY: Main checker interface; four independent engines read the same input and never see each other's output
// The combined pass is pure: same text and rules, same report

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use tracing::{debug, info};

pub mod lexicon;
pub mod man_notation;
pub mod numeral;
pub mod width_rule;

pub use lexicon::{LexiconMatcher, Occurrence};
pub use man_notation::ManNotationRuleEngine;
pub use numeral::{classify, to_half_width, NumeralClass, NumeralScript};
pub use width_rule::WidthRuleEngine;

use crate::config::RuleSet;
use crate::report::CheckReport;

/// Half-open byte range into the checked text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Same span counted in characters instead of bytes
    pub fn char_range(&self, text: &str) -> Range<usize> {
        let start = text[..self.start].chars().count();
        let len = text[self.start..self.end].chars().count();
        start..start + len
    }
}

/// Rule that produced a finding
///
/// Declaration order is the presentation order of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    LexiconHit,
    DigitWidthViolation,
    ManNotationViolation,
    ExceptionWord,
}

impl FindingKind {
    pub const ALL: [FindingKind; 4] = [
        FindingKind::LexiconHit,
        FindingKind::DigitWidthViolation,
        FindingKind::ManNotationViolation,
        FindingKind::ExceptionWord,
    ];
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FindingKind::LexiconHit => "表記ゆれ",
            FindingKind::DigitWidthViolation => "数字の全角・半角",
            FindingKind::ManNotationViolation => "万の表記",
            FindingKind::ExceptionWord => "注意が必要な語",
        };
        f.write_str(label)
    }
}

/// One reportable issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub span: Span,
    /// Matched substring of the input
    pub text: String,
    pub message: String,
    pub suggestion: Option<String>,
}

/// Runs every rule engine over a text
pub struct StyleChecker {
    lexicon: LexiconMatcher,
    width: WidthRuleEngine,
    man: ManNotationRuleEngine,
}

impl StyleChecker {
    /// Compile the engines against the given rule tables
    pub fn new(rules: &RuleSet) -> Result<Self> {
        rules.validate()?;

        let checker = Self {
            lexicon: LexiconMatcher::new(rules)?,
            width: WidthRuleEngine::new()?,
            man: ManNotationRuleEngine::new()?,
        };

        info!(
            lexicon = rules.lexicon.len(),
            exceptions = rules.exceptions.len(),
            "Style checker ready"
        );
        Ok(checker)
    }

    pub fn with_builtin_rules() -> Result<Self> {
        Self::new(RuleSet::builtin())
    }

    /// Check one text and collect every finding
    ///
    /// Findings are grouped by kind in [`FindingKind`] order; within a kind
    /// they keep the order the engine produced them in.
    pub fn run(&self, text: &str) -> CheckReport {
        let lexicon_hits = self.lexicon.find(text);
        let width_violations = self.width.check(text);
        let man_violations = self.man.check(text);
        let exception_words = self.lexicon.find_exceptions(text);
        let highlights = self.lexicon.occurrences(text).into_iter().map(|o| o.span).collect();

        debug!(
            chars = text.chars().count(),
            lexicon = lexicon_hits.len(),
            width = width_violations.len(),
            man = man_violations.len(),
            exceptions = exception_words.len(),
            "Checked text"
        );

        let mut findings = Vec::with_capacity(
            lexicon_hits.len() + width_violations.len() + man_violations.len() + exception_words.len(),
        );
        findings.extend(lexicon_hits);
        findings.extend(width_violations);
        findings.extend(man_violations);
        findings.extend(exception_words);

        // Normalization works on a copy; the engines above all saw the original digits
        let normalized_text = text
            .chars()
            .any(numeral::is_full_width_digit)
            .then(|| to_half_width(text));

        CheckReport {
            findings,
            normalized_text,
            highlights,
        }
    }
}

// WHY: Literal multi-pattern search over the lexicon and exception words
// Variants are compiled as literals, so characters like `.` or `(` in a user table never act as pattern syntax

use aho_corasick::{AhoCorasick, MatchKind};
use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{ExceptionEntry, LexiconEntry, RuleSet};

use super::{Finding, FindingKind, Span};

/// Matches the lexicon and exception tables against text
pub struct LexiconMatcher {
    entries: Vec<LexiconEntry>,
    exceptions: Vec<ExceptionEntry>,
    /// Reports every occurrence, overlapping included; used for detection
    detector: Option<AhoCorasick>,
    /// Leftmost-longest, non-overlapping; used for highlighting
    highlighter: Option<AhoCorasick>,
    exception_detector: Option<AhoCorasick>,
}

/// One occurrence of a lexicon variant in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Index into the lexicon
    pub entry: usize,
    pub span: Span,
}

impl LexiconMatcher {
    pub fn new(rules: &RuleSet) -> Result<Self> {
        let variants: Vec<&str> = rules.lexicon.iter().map(|e| e.variant.as_str()).collect();
        let words: Vec<&str> = rules.exceptions.iter().map(|e| e.word.as_str()).collect();

        let detector = build_automaton(&variants, MatchKind::Standard)
            .context("Failed to compile lexicon detector")?;
        let highlighter = build_automaton(&variants, MatchKind::LeftmostLongest)
            .context("Failed to compile lexicon highlighter")?;
        let exception_detector = build_automaton(&words, MatchKind::Standard)
            .context("Failed to compile exception-word detector")?;

        debug!(
            variants = variants.len(),
            exceptions = words.len(),
            "Compiled lexicon matcher"
        );

        Ok(Self {
            entries: rules.lexicon.clone(),
            exceptions: rules.exceptions.clone(),
            detector,
            highlighter,
            exception_detector,
        })
    }

    /// One LexiconHit per lexicon entry present in the text, in lexicon order
    ///
    /// The span anchors at the first occurrence only. Use [`Self::occurrences`]
    /// to locate every occurrence for highlighting.
    pub fn find(&self, text: &str) -> Vec<Finding> {
        let first = first_occurrences(self.detector.as_ref(), self.entries.len(), text);

        self.entries
            .iter()
            .zip(first)
            .filter_map(|(entry, span)| {
                let span = span?;
                Some(Finding {
                    kind: FindingKind::LexiconHit,
                    span,
                    text: entry.variant.clone(),
                    message: format!("「{}」は「{}」と表記するのが望ましいです。", entry.variant, entry.preferred),
                    suggestion: Some(entry.preferred.clone()),
                })
            })
            .collect()
    }

    /// Every non-overlapping occurrence of any variant, left to right
    ///
    /// Where variants overlap (又 inside 又は) the longest one starting
    /// leftmost wins, so highlighting never nests.
    pub fn occurrences(&self, text: &str) -> Vec<Occurrence> {
        let Some(highlighter) = self.highlighter.as_ref() else {
            return Vec::new();
        };

        highlighter
            .find_iter(text)
            .map(|m| Occurrence {
                entry: m.pattern().as_usize(),
                span: Span::new(m.start(), m.end()),
            })
            .collect()
    }

    /// One ExceptionWord per exception word present in the text, in table order
    pub fn find_exceptions(&self, text: &str) -> Vec<Finding> {
        let first = first_occurrences(self.exception_detector.as_ref(), self.exceptions.len(), text);

        self.exceptions
            .iter()
            .zip(first)
            .filter_map(|(entry, span)| {
                let span = span?;
                Some(Finding {
                    kind: FindingKind::ExceptionWord,
                    span,
                    text: entry.word.clone(),
                    message: format!("『{}』が含まれています：{}", entry.word, entry.note),
                    suggestion: None,
                })
            })
            .collect()
    }
}

fn build_automaton(patterns: &[&str], kind: MatchKind) -> Result<Option<AhoCorasick>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let automaton = AhoCorasick::builder().match_kind(kind).build(patterns)?;
    Ok(Some(automaton))
}

/// Earliest-starting occurrence of each pattern, indexed by pattern id
fn first_occurrences(automaton: Option<&AhoCorasick>, patterns: usize, text: &str) -> Vec<Option<Span>> {
    let mut first: Vec<Option<Span>> = vec![None; patterns];
    let Some(automaton) = automaton else {
        return first;
    };

    // Overlapping matches arrive ordered by end offset, so keep the smallest start
    for m in automaton.find_overlapping_iter(text) {
        let slot = &mut first[m.pattern().as_usize()];
        match *slot {
            Some(span) if span.start <= m.start() => {}
            _ => *slot = Some(Span::new(m.start(), m.end())),
        }
    }

    first
}

// WHY: Aggregated result of one check plus the projections a front end renders
// Detection (one finding per pair) and highlighting (every occurrence) are kept apart

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::checker::{Finding, FindingKind, Span};

/// Everything one check produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Grouped by kind in [`FindingKind`] order
    pub findings: Vec<Finding>,
    /// Input with full-width digits rewritten to half-width; only present if it differs
    pub normalized_text: Option<String>,
    /// Every lexicon-variant occurrence, ascending and non-overlapping
    #[serde(default)]
    pub highlights: Vec<Span>,
}

/// Opening and closing emphasis markers for highlighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub open: String,
    pub close: String,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
        }
    }
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn findings_of(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings_of(kind).count()
    }

    /// `(variant, preferred)` rows for every lexicon hit
    pub fn lexicon_rows(&self) -> Vec<(&str, &str)> {
        self.findings_of(FindingKind::LexiconHit)
            .map(|f| (f.text.as_str(), f.suggestion.as_deref().unwrap_or_default()))
            .collect()
    }

    /// Warning lines for the numeral rules and exception words, in report order
    pub fn advisories(&self) -> Vec<&str> {
        self.findings
            .iter()
            .filter(|f| f.kind != FindingKind::LexiconHit)
            .map(|f| f.message.as_str())
            .collect()
    }

    /// The checked text with every lexicon occurrence wrapped in `marker`
    ///
    /// `text` must be the string this report was produced from.
    pub fn highlighted(&self, text: &str, marker: &Marker) -> String {
        let extra = self.highlights.len() * (marker.open.len() + marker.close.len());
        let mut out = String::with_capacity(text.len() + extra);
        let mut cursor = 0;

        for span in &self.highlights {
            let in_bounds = span.start >= cursor && span.start <= span.end && span.end <= text.len();
            if !in_bounds || !text.is_char_boundary(span.start) || !text.is_char_boundary(span.end) {
                continue;
            }
            out.push_str(&text[cursor..span.start]);
            out.push_str(&marker.open);
            out.push_str(&text[span.start..span.end]);
            out.push_str(&marker.close);
            cursor = span.end;
        }
        out.push_str(&text[cursor..]);
        out
    }
}

/// Options for the plain-text rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub marker: Marker,
    pub show_highlight: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            marker: Marker::default(),
            show_highlight: true,
        }
    }
}

/// Render a report the way the interactive checker lays it out
pub fn render_text(text: &str, report: &CheckReport, options: &RenderOptions) -> String {
    let mut out = String::new();

    if text.trim().is_empty() {
        out.push_str("文章が空です！\n");
        return out;
    }

    if options.show_highlight {
        out.push_str("### ハイライト結果\n");
        out.push_str(&report.highlighted(text, &options.marker));
        out.push_str("\n\n");
    }

    let rows = report.lexicon_rows();
    if rows.is_empty() {
        out.push_str("表記ゆれは見つかりませんでした！\n");
    } else {
        out.push_str("### 該当表記一覧\n");
        out.push_str("| 間違い | 正しい表記 |\n");
        out.push_str("|---|---|\n");
        for (variant, preferred) in rows {
            let _ = writeln!(out, "| {variant} | {preferred} |");
        }
    }

    let numeral_warnings: Vec<&Finding> = report
        .findings
        .iter()
        .filter(|f| {
            matches!(
                f.kind,
                FindingKind::DigitWidthViolation | FindingKind::ManNotationViolation
            )
        })
        .collect();
    if !numeral_warnings.is_empty() {
        out.push_str("\n### 数字ルールの指摘\n");
        for finding in numeral_warnings {
            let _ = writeln!(out, "- {}", finding.message);
        }
    }

    if report.count(FindingKind::ExceptionWord) > 0 {
        out.push_str("\n### 注意が必要な語\n");
        for finding in report.findings_of(FindingKind::ExceptionWord) {
            let _ = writeln!(out, "- {}", finding.message);
        }
    }

    out
}

/// Machine-readable report for one input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// File path, or `-` for standard input
    pub source: String,
    pub findings: Vec<Finding>,
    pub highlighted: String,
    pub normalized_text: Option<String>,
}

impl JsonReport {
    pub fn new(source: impl Into<String>, text: &str, report: &CheckReport, marker: &Marker) -> Self {
        Self {
            source: source.into(),
            findings: report.findings.clone(),
            highlighted: report.highlighted(text, marker),
            normalized_text: report.normalized_text.clone(),
        }
    }
}

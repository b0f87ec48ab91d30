// Behavioral properties of a full check run against the built-in rules
// WHY: These pin down observable output that front ends rely on

use hyoki::{FindingKind, RuleSet, Span, StyleChecker};
use std::collections::HashSet;
use std::sync::OnceLock;

static CHECKER: OnceLock<StyleChecker> = OnceLock::new();

fn checker() -> &'static StyleChecker {
    CHECKER.get_or_init(|| StyleChecker::with_builtin_rules().expect("built-in rules compile"))
}

#[test]
fn test_determinism() {
    let text = "子供達は5人、１２台、3万円と1２万円。事の次第は又は及び。";
    assert_eq!(checker().run(text), checker().run(text));
}

#[test]
fn test_empty_input_has_no_findings() {
    let report = checker().run("");
    assert!(report.is_clean());
    for kind in FindingKind::ALL {
        assert_eq!(report.count(kind), 0, "{kind:?}");
    }
    assert!(report.normalized_text.is_none());
    assert!(report.highlights.is_empty());
}

#[test]
fn test_every_lexicon_pair_is_detected_alone() {
    for entry in &RuleSet::builtin().lexicon {
        let report = checker().run(&entry.variant);
        let hits: Vec<_> = report
            .findings_of(FindingKind::LexiconHit)
            .filter(|f| f.text == entry.variant)
            .collect();

        assert_eq!(hits.len(), 1, "variant {}", entry.variant);
        assert_eq!(hits[0].suggestion.as_deref(), Some(entry.preferred.as_str()));
        assert_eq!(hits[0].span, Span::new(0, entry.variant.len()));
    }
}

#[test]
fn test_single_digit_width() {
    assert_eq!(checker().run("5").count(FindingKind::DigitWidthViolation), 1);
    assert_eq!(checker().run("５").count(FindingKind::DigitWidthViolation), 0);
}

#[test]
fn test_multi_digit_width() {
    assert_eq!(checker().run("１２").count(FindingKind::DigitWidthViolation), 1);
    assert_eq!(checker().run("12").count(FindingKind::DigitWidthViolation), 0);

    let report = checker().run("1a2");
    let flagged: Vec<&str> = report
        .findings_of(FindingKind::DigitWidthViolation)
        .map(|f| f.text.as_str())
        .collect();
    assert_eq!(flagged, vec!["1", "2"]);
}

#[test]
fn test_mixed_width_run_without_man_is_not_flagged() {
    let report = checker().run("1２");
    assert!(report.is_clean());
}

#[test]
fn test_man_half_width() {
    let report = checker().run("12万");
    let man: Vec<_> = report.findings_of(FindingKind::ManNotationViolation).collect();
    assert_eq!(man.len(), 1);
    assert_eq!(man[0].suggestion.as_deref(), Some("十二万"));
}

#[test]
fn test_man_three() {
    for text in ["3万", "３万"] {
        let report = checker().run(text);
        let man: Vec<_> = report.findings_of(FindingKind::ManNotationViolation).collect();
        assert_eq!(man.len(), 1, "{text}");
        assert_eq!(man[0].suggestion.as_deref(), Some("三万"), "{text}");
    }
}

#[test]
fn test_man_mixed_width() {
    let report = checker().run("1２万");
    let man: Vec<_> = report.findings_of(FindingKind::ManNotationViolation).collect();
    assert_eq!(man.len(), 1);
    assert!(man[0].message.contains("混在"));
    assert!(man[0].suggestion.is_none());
    // The mixed run is not a width-rule violation on its own
    assert_eq!(report.count(FindingKind::DigitWidthViolation), 0);
}

#[test]
fn test_man_spans_are_distinct() {
    let text = "3万、12万、1２万、３０万、万一、十万";
    let report = checker().run(text);
    let spans: Vec<Span> = report
        .findings_of(FindingKind::ManNotationViolation)
        .map(|f| f.span)
        .collect();
    let distinct: HashSet<Span> = spans.iter().copied().collect();

    assert_eq!(spans.len(), 4);
    assert_eq!(distinct.len(), spans.len());
}

#[test]
fn test_exception_word_alongside_lexicon_hit() {
    let report = checker().run("事");
    let exceptions: Vec<_> = report.findings_of(FindingKind::ExceptionWord).collect();
    assert_eq!(exceptions.len(), 1);
    assert_eq!(
        exceptions[0].message,
        "『事』が含まれています：『自分事』『出来事』などは例外の可能性があります。"
    );
    assert_eq!(report.count(FindingKind::LexiconHit), 1);
}

#[test]
fn test_input_not_mutated() {
    let text = String::from("１２万人と１２人");
    let before = text.clone();
    let report = checker().run(&text);

    assert_eq!(text, before);
    assert_eq!(report.normalized_text.as_deref(), Some("12万人と12人"));
    // The width rule saw the original full-width digits
    assert_eq!(report.count(FindingKind::DigitWidthViolation), 2);
}

#[test]
fn test_engines_do_not_suppress_each_other() {
    // １５ breaks the width rule and is also the numeral of a 万 token
    let report = checker().run("１５万");
    assert_eq!(report.count(FindingKind::DigitWidthViolation), 1);
    assert_eq!(report.count(FindingKind::ManNotationViolation), 1);
}

#[test]
fn test_other_scripts_produce_nothing() {
    let report = checker().run("The quick brown fox. Быстрая лиса.");
    assert!(report.is_clean());
}

#[test]
fn test_spans_slice_the_input() {
    let text = "子供達が１２人、zoomで3万回";
    let report = checker().run(text);
    for finding in &report.findings {
        assert_eq!(&text[finding.span.start..finding.span.end], finding.text);
    }
}

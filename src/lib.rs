pub mod checker;
pub mod config;
pub mod discovery;
pub mod reader;
pub mod report;

// Re-export main types for convenient access
pub use checker::{Finding, FindingKind, Span, StyleChecker};
pub use config::{ExceptionEntry, LexiconEntry, RuleSet};
pub use report::{CheckReport, Marker};

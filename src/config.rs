// WHY: Rule tables are plain data, loaded once and borrowed by every engine
// Built-in tables ship inside the binary; users may extend or replace them with a TOML file

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

const BUILTIN_RULES_TOML: &str = include_str!("../data/rules.toml");

/// A variant spelling and the form that should be used instead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub variant: String,
    pub preferred: String,
}

impl LexiconEntry {
    pub fn new(variant: impl Into<String>, preferred: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            preferred: preferred.into(),
        }
    }
}

/// A word that is always surfaced with an advisory note, whatever the lexicon says
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionEntry {
    pub word: String,
    pub note: String,
}

impl ExceptionEntry {
    pub fn new(word: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            note: note.into(),
        }
    }
}

/// Immutable rule tables shared by the checker engines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub lexicon: Vec<LexiconEntry>,
    #[serde(default)]
    pub exceptions: Vec<ExceptionEntry>,
}

impl RuleSet {
    /// Built-in tables, parsed on first use and shared for the rest of the process
    pub fn builtin() -> &'static RuleSet {
        static BUILTIN: OnceLock<RuleSet> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            // The embedded table is covered by unit tests; a parse failure here is a build defect.
            let rules = RuleSet::from_toml_str(BUILTIN_RULES_TOML)
                .expect("embedded data/rules.toml must be a valid rule table");
            debug!(
                lexicon = rules.lexicon.len(),
                exceptions = rules.exceptions.len(),
                "Loaded built-in rule tables"
            );
            rules
        })
    }

    /// Parse and validate rule tables from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let rules: RuleSet = toml::from_str(content).context("Failed to parse rule table TOML")?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load rule tables from a TOML file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule table {}", path.display()))?;
        let rules = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid rule table {}", path.display()))?;
        info!(
            path = %path.display(),
            lexicon = rules.lexicon.len(),
            exceptions = rules.exceptions.len(),
            "Loaded rule tables"
        );
        Ok(rules)
    }

    /// Check the table invariants: non-empty, distinct variants and exception words
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.lexicon.len());
        for (index, entry) in self.lexicon.iter().enumerate() {
            if entry.variant.is_empty() {
                bail!("Lexicon entry #{index} has an empty variant (preferred: {:?})", entry.preferred);
            }
            if !seen.insert(entry.variant.as_str()) {
                bail!("Lexicon entry #{index} repeats variant {:?}", entry.variant);
            }
        }

        let mut seen = HashSet::with_capacity(self.exceptions.len());
        for (index, entry) in self.exceptions.iter().enumerate() {
            if entry.word.is_empty() {
                bail!("Exception entry #{index} has an empty word");
            }
            if !seen.insert(entry.word.as_str()) {
                bail!("Exception entry #{index} repeats word {:?}", entry.word);
            }
        }

        Ok(())
    }

    /// Extend these tables with user-supplied ones
    ///
    /// A user entry whose key already exists overrides it in place, so lexicon
    /// order (and therefore report order) stays stable. New keys are appended.
    pub fn merged_with(&self, other: &RuleSet) -> RuleSet {
        let mut lexicon = self.lexicon.clone();
        for entry in &other.lexicon {
            match lexicon.iter_mut().find(|e| e.variant == entry.variant) {
                Some(existing) => existing.preferred = entry.preferred.clone(),
                None => lexicon.push(entry.clone()),
            }
        }

        let mut exceptions = self.exceptions.clone();
        for entry in &other.exceptions {
            match exceptions.iter_mut().find(|e| e.word == entry.word) {
                Some(existing) => existing.note = entry.note.clone(),
                None => exceptions.push(entry.clone()),
            }
        }

        RuleSet { lexicon, exceptions }
    }
}

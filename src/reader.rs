use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

/// Configuration for input reading behavior
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue with the remaining inputs
    pub fail_fast: bool,
}

/// Where a checked text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Label used in reports: the file path, or `-` for standard input
    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "-".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// One input, read in full or with the reason it could not be
#[derive(Debug, Clone)]
pub struct ReadOutcome {
    pub source: InputSource,
    pub text: Option<String>,
    pub bytes_read: u64,
    pub error: Option<String>,
}

/// Read a whole file as UTF-8 text
pub async fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading input file: {}", path.display());

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to open file {}", path.display()))?;

    String::from_utf8(bytes)
        .with_context(|| format!("File is not valid UTF-8: {}", path.display()))
}

/// Read standard input to the end as UTF-8 text
pub async fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut bytes)
        .await
        .context("Failed to read standard input")?;

    String::from_utf8(bytes).context("Standard input is not valid UTF-8")
}

/// Async reader over a batch of input files
pub struct InputReader {
    config: ReaderConfig,
}

impl InputReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read every file in order
    ///
    /// With `fail_fast` the first failure is returned as an error; otherwise it
    /// is recorded on that file's outcome and reading continues.
    pub async fn read_files(&self, paths: &[PathBuf]) -> Result<Vec<ReadOutcome>> {
        let mut outcomes = Vec::with_capacity(paths.len());

        for path in paths {
            let source = InputSource::File(path.clone());
            match read_input(path).await {
                Ok(text) => {
                    outcomes.push(ReadOutcome {
                        source,
                        bytes_read: text.len() as u64,
                        text: Some(text),
                        error: None,
                    });
                }
                Err(e) => {
                    if self.config.fail_fast {
                        return Err(e);
                    }
                    let error_msg = format!("{e:#}");
                    warn!("{}", error_msg);
                    outcomes.push(ReadOutcome {
                        source,
                        text: None,
                        bytes_read: 0,
                        error: Some(error_msg),
                    });
                }
            }
        }

        let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
        info!("Read {} inputs, {} failed", outcomes.len(), failed);
        Ok(outcomes)
    }
}

use anyhow::{bail, Context, Result};
use glob::glob;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// True if the argument uses glob syntax rather than naming one file
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand file arguments into a sorted, deduplicated list of files
///
/// Plain paths must name an existing file. Glob patterns may match nothing,
/// which is logged and skipped; directories they match are ignored.
pub fn expand_inputs<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();

        if !is_glob_pattern(pattern) {
            let path = Path::new(pattern);
            if !path.exists() {
                bail!("Input file does not exist: {}", path.display());
            }
            if !path.is_file() {
                bail!("Input path is not a file: {}", path.display());
            }
            files.insert(path.to_path_buf());
            continue;
        }

        let entries = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        let mut matched = 0;
        for entry in entries {
            let path = entry.with_context(|| format!("Failed to expand glob pattern: {pattern}"))?;
            if path.is_file() {
                debug!("Found matching file: {}", path.display());
                files.insert(path);
                matched += 1;
            }
        }

        if matched == 0 {
            warn!("Glob pattern matched no files: {}", pattern);
        }
    }

    info!("Expanded {} input arguments to {} files", patterns.len(), files.len());
    Ok(files.into_iter().collect())
}

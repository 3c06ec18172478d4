// Rust guideline compliant 2026-02-06

//! Markdown aggregation for a single directory.
//!
//! The merge is a linear three-step sequence: delete the previous aggregate
//! if present, enumerate candidate files, append each candidate's content
//! plus a trailing newline to a fresh aggregate.

use crate::{Config, Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a completed merge.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Path of the aggregate output file.
    pub output: PathBuf,
    /// Candidate files appended, in the order they were written.
    pub sources: Vec<PathBuf>,
}

/// Lists candidate files in a directory.
///
/// A candidate is any entry whose name ends with the configured suffix and is
/// not exactly the configured exclusion or the aggregate itself. The filter
/// operates on names only; entry types are not inspected. The list is in
/// directory-listing order unless `Config::sort` is enabled.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn candidates(dir: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        // Names that are not valid UTF-8 cannot match the suffix filter.
        let name = match file_name.to_str() {
            Some(name) => name,
            None => continue,
        };
        if name.ends_with(&config.extension) && name != config.exclude && name != config.output {
            files.push(entry.path());
        }
    }

    if config.sort {
        files.sort();
    }

    Ok(files)
}

/// Merges every candidate file in `dir` into the aggregate output file.
///
/// Any previous aggregate is deleted first, so its content never survives
/// into the new run and it is never enumerated as its own input. Candidates
/// are read fully, one at a time, and each is written followed by a single
/// newline. There is no rollback: a failure mid-run leaves the aggregate
/// holding the candidates processed so far.
///
/// # Arguments
///
/// * `dir` - The target directory
/// * `config` - Merge configuration
///
/// # Returns
///
/// A [`MergeOutcome`] naming the aggregate and the sources appended to it.
///
/// # Errors
///
/// Returns an error if:
/// - The previous aggregate exists but cannot be deleted
/// - The directory cannot be read
/// - A candidate cannot be opened or read, or is not valid UTF-8
/// - The aggregate cannot be created or written
pub fn merge(dir: &Path, config: &Config) -> Result<MergeOutcome> {
    let output_path = dir.join(&config.output);

    // Reset. Absence is the common case, not an error.
    if output_path.is_file() {
        fs::remove_file(&output_path)?;
        debug!(file = %output_path.display(), "removed previous aggregate");
    }

    let files = candidates(dir, config)?;

    // Append mode creates the aggregate even when there are zero candidates.
    let mut aggregate = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&output_path)?;

    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        let bytes = fs::read(&path)?;
        let text = String::from_utf8(bytes).map_err(|source| Error::Decode {
            path: path.clone(),
            source,
        })?;
        aggregate.write_all(text.as_bytes())?;
        aggregate.write_all(b"\n")?;
        debug!(file = %path.display(), bytes = text.len(), "appended");
        sources.push(path);
    }

    info!(
        aggregate = %output_path.display(),
        files = sources.len(),
        "merge complete"
    );

    Ok(MergeOutcome {
        output: output_path,
        sources,
    })
}

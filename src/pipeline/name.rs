//! Namer: derives a unique timestamp-based filename for each candidate.
//!
//! The name is the candidate's last-modification time formatted as
//! `YYMMDD_HHMMSS` plus its original extension. When that name is taken
//! (either by a file already in the target directory or by an earlier
//! candidate in the same run) a `_i` suffix is appended before the extension,
//! with the smallest `i` that makes the name unique.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::MavicaCopyError;

/// One candidate with the target filename chosen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Path of the picture on the floppy
    pub source: PathBuf,
    /// Bare filename (not a path) it will be copied to
    pub target_name: String,
}

/// Build the full candidate -> filename mapping before any copy happens.
///
/// Candidates are processed in the given order, so suffix numbering is stable
/// for a sorted input. An unreadable modification time aborts the whole batch;
/// we never substitute a made-up timestamp for a picture.
pub fn assign_target_names(target_dir: &Path, candidates: &[PathBuf]) -> Result<Vec<Assignment>> {
    let mut taken = existing_names(target_dir)?;
    let mut assignments = Vec::with_capacity(candidates.len());

    for source in candidates {
        let timestamp = mtime_stamp(source)?;
        let extension = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let mut target_name = format!("{timestamp}{extension}");
        let mut i = 0u32;
        while taken.contains(&target_name) {
            i += 1;
            target_name = format!("{timestamp}_{i}{extension}");
        }

        debug!(source = %source.display(), name = %target_name, "assigned target name");
        taken.insert(target_name.clone());
        assignments.push(Assignment {
            source: source.clone(),
            target_name,
        });
    }

    Ok(assignments)
}

/// Last-modification time of `path` formatted as `YYMMDD_HHMMSS` (local time).
fn mtime_stamp(path: &Path) -> Result<String, MavicaCopyError> {
    let wrap = |source| MavicaCopyError::MtimeUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let mtime = fs::metadata(path).map_err(wrap)?.modified().map_err(wrap)?;
    let local: DateTime<Local> = mtime.into();
    Ok(local.format("%y%m%d_%H%M%S").to_string())
}

/// Filenames currently present in the target directory.
fn existing_names(target_dir: &Path) -> Result<HashSet<String>> {
    let entries = fs::read_dir(target_dir)
        .with_context(|| format!("Cannot read target directory '{}'", target_dir.display()))?;
    let mut names = HashSet::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Cannot read target directory '{}'", target_dir.display()))?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

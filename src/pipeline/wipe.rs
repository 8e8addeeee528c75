//! Wiper: clears the floppy after a fully verified copy.
//!
//! The caller has already checked the preconditions (wipe requested, zero
//! copy failures, root privilege). This module still refuses to touch
//! anything until the user has seen the full list of entries and typed an
//! explicit `yes`.

use anyhow::{Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::Path;
use tracing::{info, warn};

use crate::output;

/// What the wipe step ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeOutcome {
    /// User confirmed; `n` top-level entries were removed.
    Wiped(usize),
    /// User declined; nothing was removed.
    Declined,
}

/// Show the directory contents, ask for confirmation on `input`, and on a
/// `yes` remove every entry directly inside `disk_dir` (files directly,
/// directories recursively). Any other answer removes nothing.
///
/// `input` is generic so tests can feed answers without a terminal; the
/// binary passes a locked stdin.
pub fn wipe_disk<R: BufRead>(disk_dir: &Path, input: R) -> Result<WipeOutcome> {
    warn!("Everything in {} will be removed.", disk_dir.display());
    warn!("Directory contents:");
    for entry in list_entries(disk_dir)? {
        warn!("{}", entry);
    }

    output::print_prompt("Type 'yes' to continue:");
    if !read_confirmation(input)? {
        info!("Nothing has been removed");
        return Ok(WipeOutcome::Declined);
    }

    let removed = remove_contents(disk_dir)?;
    Ok(WipeOutcome::Wiped(removed))
}

/// Read one line and accept only a case-insensitive `yes`.
fn read_confirmation<R: BufRead>(mut input: R) -> Result<bool> {
    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation input")?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

/// Names of the entries currently on the disk, sorted for a stable listing.
fn list_entries(disk_dir: &Path) -> Result<Vec<String>> {
    let read = fs::read_dir(disk_dir)
        .with_context(|| format!("Cannot read source directory '{}'", disk_dir.display()))?;
    let mut names: Vec<String> = read
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names)
}

/// Remove every entry directly inside `disk_dir`, logging each removal.
fn remove_contents(disk_dir: &Path) -> Result<usize> {
    let mut removed = 0usize;
    for entry in fs::read_dir(disk_dir)
        .with_context(|| format!("Cannot read source directory '{}'", disk_dir.display()))?
    {
        let entry = entry
            .with_context(|| format!("Cannot read source directory '{}'", disk_dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("Cannot stat '{}'", path.display()))?;

        let result = if file_type.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            // regular files and symlinks
            fs::remove_file(&path)
        };
        result.with_context(|| format!("Failed to remove '{}'", path.display()))?;

        info!("{} removed", path.display());
        removed += 1;
    }
    Ok(removed)
}

//! Scanner: lists candidate pictures on the floppy.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Return every regular file in `source_dir` (non-recursive) with a
/// case-insensitive `jpg` extension, sorted by path so the rest of the
/// pipeline is deterministic. An empty result is valid; an unreadable
/// directory is an error.
pub fn find_pictures(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pictures = Vec::new();
    for entry in WalkDir::new(source_dir).min_depth(1).max_depth(1) {
        let entry = entry
            .with_context(|| format!("Cannot read source directory '{}'", source_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg"))
        {
            pictures.push(path);
        }
    }
    pictures.sort();

    info!("{} pictures found", pictures.len());
    Ok(pictures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn empty_directory_yields_empty_list() {
        let dir = assert_fs::TempDir::new().unwrap();
        let found = find_pictures(dir.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = assert_fs::TempDir::new().unwrap();
        for name in ["a.jpg", "b.JPG", "c.Jpg"] {
            dir.child(name).touch().unwrap();
        }
        dir.child("notes.txt").touch().unwrap();
        dir.child("d.jpeg").touch().unwrap();

        let found = find_pictures(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["a.jpg", "b.JPG", "c.Jpg"]);
    }

    #[test]
    fn subdirectories_are_not_descended() {
        let dir = assert_fs::TempDir::new().unwrap();
        let sub = dir.child("DCIM");
        sub.create_dir_all().unwrap();
        sub.child("nested.jpg").touch().unwrap();
        dir.child("top.jpg").touch().unwrap();

        let found = find_pictures(dir.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("top.jpg"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = assert_fs::TempDir::new().unwrap();
        assert!(find_pictures(&dir.path().join("absent")).is_err());
    }
}

//! Copier: copies each assigned picture into the target directory.
//!
//! A per-file copy error never aborts the batch; it is logged and the source
//! joins the failure list. Timestamps are carried over to the copy so the
//! pictures keep the date they were taken. Ownership fix-up afterwards is
//! best-effort only.

use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::config::Owner;
use crate::pipeline::Assignment;
use crate::platform;

/// Outcome of one copy pass. The two lists are disjoint and together cover
/// every assignment.
#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    /// Destination paths of successfully copied pictures
    pub copied: Vec<PathBuf>,
    /// Source paths that failed to copy
    pub failed: Vec<PathBuf>,
}

impl CopyReport {
    /// True when every assignment was copied.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.copied.len() + self.failed.len()
    }
}

/// Copy every assignment into `target_dir` under its chosen name, then apply
/// the ownership fix-up to the successful copies. Emits a summary of both
/// outcome lists.
pub fn copy_pictures(assignments: &[Assignment], target_dir: &Path, owner: Owner) -> CopyReport {
    let mut report = CopyReport::default();

    for assignment in assignments {
        let dest = target_dir.join(&assignment.target_name);
        match copy_with_times(&assignment.source, &dest) {
            Ok(()) => report.copied.push(dest),
            Err(e) => {
                error!(
                    source = %assignment.source.display(),
                    dest = %dest.display(),
                    error = %e,
                    "copy failed"
                );
                report.failed.push(assignment.source.clone());
            }
        }
    }

    info!(
        "Successfully copied {}/{} files:",
        report.copied.len(),
        assignments.len()
    );
    for path in &report.copied {
        info!("{}", path.display());
    }

    if !report.failed.is_empty() {
        error!(
            "Failed to copy {}/{} files:",
            report.failed.len(),
            assignments.len()
        );
        for path in &report.failed {
            error!("{}", path.display());
        }
    }

    apply_ownership(&report.copied, owner);

    report
}

/// Copy file content and carry the source's atime/mtime over to the copy.
/// `fs::copy` already carries permission bits; a failure to set the times is
/// a warning, not a copy failure (the content is intact).
fn copy_with_times(src: &Path, dest: &Path) -> std::io::Result<()> {
    fs::copy(src, dest)?;

    match fs::metadata(src) {
        Ok(meta) => {
            let atime = FileTime::from_last_access_time(&meta);
            let mtime = FileTime::from_last_modification_time(&meta);
            if let Err(e) = filetime::set_file_times(dest, atime, mtime) {
                warn!(path = %dest.display(), error = %e, "could not preserve timestamps");
            } else {
                debug!(path = %dest.display(), "preserved timestamps");
            }
        }
        Err(e) => {
            warn!(path = %src.display(), error = %e, "could not re-read source metadata");
        }
    }

    Ok(())
}

/// Best-effort: hand the copies to the configured owner. The copy itself has
/// already succeeded, so a refused chown is only worth a warning.
fn apply_ownership(copied: &[PathBuf], owner: Owner) {
    for path in copied {
        if let Err(e) = platform::chown(path, owner.uid, owner.gid) {
            warn!(
                path = %path.display(),
                owner = %owner,
                error = %e,
                "could not set ownership on the target file, continuing anyway"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_OWNER;
    use assert_fs::prelude::*;
    use filetime::FileTime;

    fn assignment(source: &Path, name: &str) -> Assignment {
        Assignment {
            source: source.to_path_buf(),
            target_name: name.to_string(),
        }
    }

    #[test]
    fn copies_content_under_assigned_name() {
        let source = assert_fs::TempDir::new().unwrap();
        let target = assert_fs::TempDir::new().unwrap();
        let pic = source.child("a.jpg");
        pic.write_binary(b"jpegdata").unwrap();

        let report = copy_pictures(
            &[assignment(pic.path(), "200101_120000.jpg")],
            target.path(),
            DEFAULT_OWNER,
        );

        assert!(report.is_complete());
        assert_eq!(report.copied.len(), 1);
        let dest = target.path().join("200101_120000.jpg");
        assert_eq!(fs::read(&dest).unwrap(), b"jpegdata");
        assert!(pic.path().exists(), "copy must not consume the source");
    }

    #[test]
    fn preserves_modification_time() {
        let source = assert_fs::TempDir::new().unwrap();
        let target = assert_fs::TempDir::new().unwrap();
        let pic = source.child("a.jpg");
        pic.write_binary(b"jpegdata").unwrap();
        let mtime = FileTime::from_unix_time(1_577_880_000, 0);
        filetime::set_file_mtime(pic.path(), mtime).unwrap();

        copy_pictures(
            &[assignment(pic.path(), "200101_120000.jpg")],
            target.path(),
            DEFAULT_OWNER,
        );

        let meta = fs::metadata(target.path().join("200101_120000.jpg")).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&meta).unix_seconds(), 1_577_880_000);
    }

    #[test]
    fn failures_are_recorded_and_do_not_abort() {
        let source = assert_fs::TempDir::new().unwrap();
        let target = assert_fs::TempDir::new().unwrap();
        let good = source.child("good.jpg");
        good.write_binary(b"ok").unwrap();
        let missing = source.path().join("missing.jpg");

        let report = copy_pictures(
            &[
                assignment(&missing, "200101_120000.jpg"),
                assignment(good.path(), "200101_120001.jpg"),
            ],
            target.path(),
            DEFAULT_OWNER,
        );

        assert_eq!(report.total(), 2);
        assert_eq!(report.failed, vec![missing]);
        assert_eq!(report.copied.len(), 1);
        assert!(target.path().join("200101_120001.jpg").exists());
        assert!(!report.is_complete());
    }

    #[test]
    fn outcome_lists_are_disjoint_and_cover_all() {
        let source = assert_fs::TempDir::new().unwrap();
        let target = assert_fs::TempDir::new().unwrap();
        let a = source.child("a.jpg");
        a.write_binary(b"a").unwrap();
        let b = source.path().join("b.jpg");

        let assignments = [
            assignment(a.path(), "one.jpg"),
            assignment(&b, "two.jpg"),
        ];
        let report = copy_pictures(&assignments, target.path(), DEFAULT_OWNER);

        assert_eq!(report.total(), assignments.len());
        for failed in &report.failed {
            assert!(!report.copied.contains(failed));
        }
    }
}

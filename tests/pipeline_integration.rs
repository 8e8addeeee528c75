//! End-to-end checks of scan -> name -> copy over real temp directories.

use assert_fs::prelude::*;
use chrono::{DateTime, Local};
use filetime::FileTime;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use mavica_copy::config::DEFAULT_OWNER;
use mavica_copy::{assign_target_names, copy_pictures, find_pictures};

// 2020-01-01 12:00:00 UTC
const NOON: i64 = 1_577_880_000;

fn stamp(unix_secs: i64) -> String {
    let local: DateTime<Local> =
        (SystemTime::UNIX_EPOCH + Duration::from_secs(unix_secs as u64)).into();
    local.format("%y%m%d_%H%M%S").to_string()
}

fn picture(dir: &assert_fs::TempDir, name: &str, unix_secs: i64) -> PathBuf {
    let child = dir.child(name);
    child.write_binary(b"jpegdata").unwrap();
    filetime::set_file_mtime(child.path(), FileTime::from_unix_time(unix_secs, 0)).unwrap();
    child.path().to_path_buf()
}

#[test]
fn distinct_timestamps_copy_without_suffixes() {
    let floppy = assert_fs::TempDir::new().unwrap();
    let pics = assert_fs::TempDir::new().unwrap();
    picture(&floppy, "MVC-001F.jpg", NOON);
    picture(&floppy, "MVC-002F.jpg", NOON + 1);
    picture(&floppy, "MVC-003F.jpg", NOON + 62);

    let candidates = find_pictures(floppy.path()).unwrap();
    let assignments = assign_target_names(pics.path(), &candidates).unwrap();
    let report = copy_pictures(&assignments, pics.path(), DEFAULT_OWNER);

    assert!(report.is_complete());
    assert_eq!(report.copied.len(), 3);
    for a in &assignments {
        assert!(pics.path().join(&a.target_name).exists());
        // YYMMDD_HHMMSS carries exactly one underscore when no suffix was needed
        assert_eq!(a.target_name.matches('_').count(), 1);
    }
}

#[test]
fn same_second_pictures_get_stable_distinct_names() {
    let floppy = assert_fs::TempDir::new().unwrap();
    let pics = assert_fs::TempDir::new().unwrap();
    picture(&floppy, "MVC-001F.jpg", NOON);
    picture(&floppy, "MVC-002F.jpg", NOON);
    picture(&floppy, "MVC-003F.jpg", NOON);

    let candidates = find_pictures(floppy.path()).unwrap();
    let assignments = assign_target_names(pics.path(), &candidates).unwrap();

    let base = stamp(NOON);
    let names: Vec<_> = assignments.iter().map(|a| a.target_name.as_str()).collect();
    assert_eq!(
        names,
        [
            format!("{base}.jpg"),
            format!("{base}_1.jpg"),
            format!("{base}_2.jpg"),
        ]
    );

    let report = copy_pictures(&assignments, pics.path(), DEFAULT_OWNER);
    assert!(report.is_complete());
    assert_eq!(report.copied.len(), 3);
}

#[test]
fn preexisting_target_name_shifts_new_copy_to_suffix_one() {
    let floppy = assert_fs::TempDir::new().unwrap();
    let pics = assert_fs::TempDir::new().unwrap();
    let base = stamp(NOON);
    pics.child(format!("{base}.jpg"))
        .write_binary(b"older copy")
        .unwrap();
    picture(&floppy, "MVC-001F.jpg", NOON);

    let candidates = find_pictures(floppy.path()).unwrap();
    let assignments = assign_target_names(pics.path(), &candidates).unwrap();
    assert_eq!(assignments[0].target_name, format!("{base}_1.jpg"));

    let report = copy_pictures(&assignments, pics.path(), DEFAULT_OWNER);
    assert!(report.is_complete());
    // the pre-existing file is untouched
    assert_eq!(
        std::fs::read(pics.path().join(format!("{base}.jpg"))).unwrap(),
        b"older copy"
    );
}

#[test]
fn empty_floppy_completes_with_zero_copies() {
    let floppy = assert_fs::TempDir::new().unwrap();
    let pics = assert_fs::TempDir::new().unwrap();

    let candidates = find_pictures(floppy.path()).unwrap();
    assert!(candidates.is_empty());

    let assignments = assign_target_names(pics.path(), &candidates).unwrap();
    let report = copy_pictures(&assignments, pics.path(), DEFAULT_OWNER);

    assert!(report.is_complete());
    assert_eq!(report.total(), 0);
    assert_eq!(std::fs::read_dir(pics.path()).unwrap().count(), 0);
}

#[test]
fn non_jpg_files_on_the_floppy_are_ignored_entirely() {
    let floppy = assert_fs::TempDir::new().unwrap();
    let pics = assert_fs::TempDir::new().unwrap();
    picture(&floppy, "MVC-001F.jpg", NOON);
    floppy.child("MAVICA.HTM").touch().unwrap();
    floppy.child("INDEX.TXT").touch().unwrap();

    let candidates = find_pictures(floppy.path()).unwrap();
    let assignments = assign_target_names(pics.path(), &candidates).unwrap();
    let report = copy_pictures(&assignments, pics.path(), DEFAULT_OWNER);

    assert_eq!(report.copied.len(), 1);
    assert_eq!(std::fs::read_dir(pics.path()).unwrap().count(), 1);
}

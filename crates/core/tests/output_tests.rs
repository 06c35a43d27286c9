use std::fs;

use tempfile::tempdir;
use unbundle_core::write_archive;

#[test]
fn creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("a/b/out.zip");
    write_archive(&target, b"PK").expect("should create parents and write");
    assert_eq!(fs::read(&target).unwrap(), b"PK");
}

#[test]
fn error_if_target_is_a_directory() {
    let dir = tempdir().unwrap();
    let err = write_archive(dir.path(), b"PK").expect_err("directory target must fail");
    assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);
}

#[test]
fn overwrites_an_existing_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("out.zip");
    write_archive(&target, b"old").unwrap();
    write_archive(&target, b"new").unwrap();
    assert_eq!(fs::read(&target).unwrap(), b"new");
}

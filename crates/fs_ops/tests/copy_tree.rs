//! Integration tests for recursive copy and tree removal.

use fs_ops::{EntryType, FsError, copy_path, entry_type, remove};
use std::fs;
use test_support::TreeFixture;

#[test]
fn copy_directory_reproduces_every_object() {
    let fixture = TreeFixture::standard();
    let temp = tempfile::tempdir().expect("tempdir");
    let dst = temp.path().join("copy");

    copy_path(fixture.root(), &dst).expect("copy tree");

    for path in fixture.expected() {
        let relative = path.strip_prefix(fixture.root()).expect("under root");
        let copied = dst.join(relative);
        assert_eq!(
            entry_type(path).expect("source type"),
            entry_type(&copied).expect("copy type"),
            "type mismatch for {relative:?}"
        );
    }
    assert_eq!(
        fs::read(dst.join("a/nested/deep.txt")).expect("read copy"),
        b"deep"
    );
}

#[test]
fn copy_refuses_existing_destination() {
    let fixture = TreeFixture::standard();
    let result = copy_path(&fixture.path("top.txt"), &fixture.path("a/x.txt"));
    assert!(matches!(result, Err(FsError::Exists { .. })));
}

#[cfg(unix)]
#[test]
fn copy_preserves_symlinks_inside_directories() {
    let mut fixture = TreeFixture::new();
    fixture.file("data/file.txt", b"data");
    fixture.symlink("data/link", "file.txt");
    let temp = tempfile::tempdir().expect("tempdir");
    let dst = temp.path().join("copy");

    copy_path(&fixture.path("data"), &dst).expect("copy");

    assert_eq!(
        entry_type(&dst.join("link")).expect("link type"),
        EntryType::Symlink
    );
    assert_eq!(
        fs::read_link(dst.join("link")).expect("read link"),
        std::path::PathBuf::from("file.txt")
    );
}

#[test]
fn remove_deletes_whole_tree() {
    let fixture = TreeFixture::standard();
    assert!(remove(&fixture.path("dir2")).expect("remove"));
    for path in fixture.descendants_of("dir2") {
        assert_eq!(entry_type(&path).expect("type"), EntryType::NotFound);
    }
}

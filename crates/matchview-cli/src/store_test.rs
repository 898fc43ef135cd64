use std::fs;

use matchview_core::{MemoryStore, HIDDEN_NAME};

use super::*;

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("s1/src/util")).unwrap();
    fs::write(dir.path().join("s1/src/Main.java"), "class Main {}\n").unwrap();
    fs::write(dir.path().join("s1/src/util/Helper.java"), "a\r\nb").unwrap();
    fs::write(dir.path().join("s1/README"), "").unwrap();
    fs::create_dir_all(dir.path().join("empty")).unwrap();
    dir
}

#[test]
fn lists_files_with_relative_names_in_stable_order() {
    let dir = fixture();
    let store = DirectoryStore::new(dir.path());
    let files = store.files_of_submission("s1").unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["README", "src/Main.java", "src/util/Helper.java"]);
    assert_eq!(files[2].content, "a\r\nb");
}

#[test]
fn missing_and_empty_submissions() {
    let dir = fixture();
    let store = DirectoryStore::new(dir.path());
    assert!(store.files_of_submission("nobody").is_none());
    assert_eq!(store.files_of_submission("empty"), Some(Vec::new()));
}

#[test]
fn ids_cannot_escape_root() {
    let dir = fixture();
    let store = DirectoryStore::new(dir.path().join("s1"));
    assert!(store.files_of_submission("..").is_none());
    assert!(store.files_of_submission("../s1").is_none());
    assert!(store.files_of_submission("").is_none());
}

#[test]
fn anonymous_ids_are_hidden() {
    let dir = fixture();
    let store = DirectoryStore::new(dir.path()).with_anonymous(vec!["s1".to_string()]);
    assert_eq!(store.display_name("s1"), HIDDEN_NAME);
    assert_eq!(store.display_name("s2"), "s2");
}

#[test]
fn display_names_agree_with_memory_store() {
    let dir = fixture();
    let ids = vec!["s1".to_string(), "x".to_string()];
    let dir_store = DirectoryStore::new(dir.path()).with_anonymous(ids.clone());
    let mut mem_store = MemoryStore::new();
    mem_store.add_anonymous(ids);
    for id in ["s1", "x", "empty", "other"] {
        assert_eq!(dir_store.display_name(id), mem_store.display_name(id), "{id}");
    }
}

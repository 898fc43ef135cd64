use super::*;

#[test]
fn unknown_submission_is_none_and_empty_is_some() {
    let mut store = MemoryStore::new();
    store.add_submission("empty", Vec::new());
    assert!(store.files_of_submission("missing").is_none());
    assert_eq!(store.files_of_submission("empty"), Some(Vec::new()));
}

#[test]
fn files_keep_insertion_order_and_replace_by_name() {
    let mut store = MemoryStore::new();
    store.add_file("s1", "b.java", "1");
    store.add_file("s1", "a.java", "2");
    store.add_file("s1", "b.java", "3");
    let files = store.files_of_submission("s1").unwrap();
    assert_eq!(files, vec![SourceFile::new("b.java", "3"), SourceFile::new("a.java", "2")]);
}

#[test]
fn display_name_honors_anonymous_set() {
    let mut store = MemoryStore::new();
    store.add_submission("s1", Vec::new());
    store.set_display_name("s1", "Alice");
    assert_eq!(store.display_name("s1"), "Alice");
    assert_eq!(store.display_name("s2"), "s2");

    store.add_anonymous(["s1", "s2"]);
    assert!(store.is_anonymous("s1"));
    assert_eq!(store.display_name("s1"), HIDDEN_NAME);
    assert_eq!(store.display_name("s2"), HIDDEN_NAME);

    store.remove_anonymous(["s1"]);
    assert_eq!(store.display_name("s1"), "Alice");

    store.reset_anonymous();
    assert!(!store.is_anonymous("s2"));
}

#[test]
fn clear_drops_everything() {
    let mut store = MemoryStore::new();
    store.add_file("b", "x", "");
    store.add_file("a", "y", "");
    assert_eq!(store.submission_ids(), vec!["a", "b"]);
    store.clear();
    assert!(store.submission_ids().is_empty());
}

#[test]
fn closure_store_delegates_lookup() {
    let store = from_fn(|id: &str| (id == "s1").then(|| vec![SourceFile::new("A.java", "x")]));
    assert_eq!(store.files_of_submission("s1").unwrap().len(), 1);
    assert!(store.files_of_submission("s2").is_none());
    assert_eq!(store.display_name("s1"), "s1");
}

#[test]
fn anonymous_set_resolves_names() {
    let mut set = AnonymousSet::new();
    set.add(["a", "b"]);
    assert_eq!(set.display_name("a", Some("Alice")), HIDDEN_NAME);
    assert_eq!(set.display_name("c", Some("Carol")), "Carol");
    assert_eq!(set.display_name("c", None), "c");
    set.remove(["a"]);
    assert_eq!(set.display_name("a", Some("Alice")), "Alice");
    set.clear();
    assert!(!set.contains("b"));
}

//! Unit tests for the BookmarkBar public API.

use tabshell::managers::bookmark_manager::{BookmarkBar, BookmarkBarTrait, UNTITLED};

#[test]
fn test_add_bookmark() {
    let mut bar = BookmarkBar::new();
    assert!(bar.is_empty());
    assert!(bar.add("https://www.rust-lang.org/", "Rust"));

    let bm = bar.get("https://www.rust-lang.org/").unwrap();
    assert_eq!(bm.title, "Rust");
    assert_eq!(bm.url, "https://www.rust-lang.org/");
    assert!(!bm.id.is_empty());
    assert_eq!(bar.len(), 1);
}

#[test]
fn test_duplicate_url_is_ignored() {
    let mut bar = BookmarkBar::new();
    assert!(bar.add("https://docs.rs/", "Docs.rs"));
    assert!(!bar.add("https://docs.rs/", "Another title"));

    assert_eq!(bar.len(), 1);
    // The first bookmark wins.
    assert_eq!(bar.get("https://docs.rs/").unwrap().title, "Docs.rs");
}

#[test]
fn test_empty_title_becomes_untitled() {
    let mut bar = BookmarkBar::new();
    bar.add("https://example.com/", "   ");
    assert_eq!(bar.get("https://example.com/").unwrap().title, UNTITLED);
}

#[test]
fn test_list_keeps_insertion_order() {
    let mut bar = BookmarkBar::new();
    bar.add("https://c.example/", "C");
    bar.add("https://a.example/", "A");
    bar.add("https://b.example/", "B");
    bar.add("https://a.example/", "A again");

    let titles: Vec<&str> = bar.list().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
}

#[test]
fn test_contains_is_exact_match() {
    let mut bar = BookmarkBar::new();
    bar.add("https://example.com/", "Example");
    assert!(bar.contains("https://example.com/"));
    assert!(!bar.contains("https://example.com"));
    assert!(bar.get("https://other.example/").is_none());
}

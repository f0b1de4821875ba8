//! Property-based tests for the bookmark bar.
//!
//! However many times a URL is added, it appears once, in the position of
//! its first addition.

use proptest::prelude::*;
use tabshell::managers::bookmark_manager::{BookmarkBar, BookmarkBarTrait};

fn arb_urls() -> impl Strategy<Value = Vec<String>> {
    // A small host pool so duplicates are common.
    prop::collection::vec(
        (0..8u8, "[a-z]{0,3}").prop_map(|(host, path)| format!("https://site{}.example/{}", host, path)),
        0..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn size_equals_unique_urls(urls in arb_urls(), title in "[ A-Za-z]{0,12}") {
        let mut bar = BookmarkBar::new();
        let mut first_seen: Vec<String> = Vec::new();

        for url in &urls {
            let added = bar.add(url, &title);
            let is_new = !first_seen.contains(url);
            prop_assert_eq!(added, is_new);
            if is_new {
                first_seen.push(url.clone());
            }
        }

        prop_assert_eq!(bar.len(), first_seen.len());
        let listed: Vec<&str> = bar.list().iter().map(|b| b.url.as_str()).collect();
        let expected: Vec<&str> = first_seen.iter().map(String::as_str).collect();
        prop_assert_eq!(listed, expected);
        prop_assert!(bar.list().iter().all(|b| !b.title.trim().is_empty()));
    }
}

use logwrapper_core::caller::shorten;
use proptest::prelude::*;

#[test]
fn test_deep_path_keeps_last_four_segments() {
    assert_eq!(shorten("/a/b/c/d/e/file.go", 73), "c/d/e/file.go:73");
}

#[test]
fn test_short_path_unchanged() {
    assert_eq!(shorten("a/b.go", 10), "a/b.go:10");
    assert_eq!(shorten("main.rs", 1), "main.rs:1");
}

#[test]
fn test_five_segments_drop_the_first() {
    assert_eq!(shorten("one/two/three/four/five.rs", 5), "two/three/four/five.rs:5");
}

#[test]
fn test_absolute_four_segment_path() {
    // Leading slash makes an empty first segment.
    assert_eq!(shorten("/b/c/d.rs", 2), "/b/c/d.rs:2");
    assert_eq!(shorten("/a/b/c/d.rs", 2), "a/b/c/d.rs:2");
}

#[test]
fn test_no_normalization() {
    assert_eq!(shorten("x/../y/./z/w.rs", 3), "y/./z/w.rs:3");
}

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9_.]{0,8}", 1..10)
}

proptest! {
    /// At most four segments survive, and they are the trailing ones
    #[test]
    fn keeps_trailing_segments(parts in segments(), line in 0u32..100_000) {
        let path = parts.join("/");
        let short = shorten(&path, line);

        let suffix = format!(":{}", line);
        prop_assert!(short.ends_with(&suffix));
        let kept = &short[..short.len() - suffix.len()];

        let keep = parts.len().min(4);
        prop_assert_eq!(kept, parts[parts.len() - keep..].join("/"));
    }

    /// Shortening an already short path only re-appends the line
    #[test]
    fn idempotent_on_kept_part(parts in segments(), line in 0u32..1000) {
        let path = parts.join("/");
        let short = shorten(&path, line);
        let kept = short.rsplit_once(':').map(|(p, _)| p.to_string()).unwrap_or_default();
        prop_assert_eq!(shorten(&kept, line), short);
    }
}

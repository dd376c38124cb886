//! Caller location shortening
//!
//! Source paths are cut down to their last few segments so records stay
//! readable and stable no matter where the tree is checked out.

/// Maximum number of path segments kept: three directories plus the file
pub const MAX_CALLER_SEGMENTS: usize = 4;

const SEPARATOR: char = '/';

/// Shorten `file` to its last [`MAX_CALLER_SEGMENTS`] segments and append `:line`
///
/// Pure segment arithmetic on `/`: no `.`/`..` resolution, no case folding.
///
/// ```
/// use logwrapper_core::caller::shorten;
///
/// assert_eq!(shorten("/a/b/c/d/e/file.go", 73), "c/d/e/file.go:73");
/// assert_eq!(shorten("a/b.go", 10), "a/b.go:10");
/// ```
pub fn shorten(file: &str, line: u32) -> String {
    // The Nth separator from the right starts the last N segments.
    let kept = match file.rmatch_indices(SEPARATOR).nth(MAX_CALLER_SEGMENTS - 1) {
        Some((idx, _)) => &file[idx + SEPARATOR.len_utf8()..],
        None => file,
    };
    format!("{}:{}", kept, line)
}

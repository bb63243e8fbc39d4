//! ## path
//!
//! Share path utilities.
//!
//! Share paths always use `\` as separator: this is the SMB namespace convention,
//! so none of these functions rely on `std::path`.

/// Separator of share paths
pub const SEPARATOR: char = '\\';

/// Strip the leading run of separators from `path`
pub fn trim_leading(path: &str) -> &str {
    path.trim_start_matches(SEPARATOR)
}

/// Iterate over the non-empty segments of `path`
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Returns whether `path` is made of a single segment once leading separators are stripped
pub fn is_single_segment(path: &str) -> bool {
    !trim_leading(path).contains(SEPARATOR)
}

/// Get the parent of `path`, without leading and trailing separators.
/// Returns `None` if `path` has no parent directory.
pub fn parent(path: &str) -> Option<&str> {
    let path = path.trim_matches(SEPARATOR);
    path.rfind(SEPARATOR)
        .map(|idx| path[..idx].trim_end_matches(SEPARATOR))
        .filter(|p| !p.is_empty())
}

/// Normalize `path` to its canonical form: segments joined by a single separator, with no leading or trailing one
pub fn normalize(path: &str) -> String {
    segments(path).collect::<Vec<&str>>().join("\\")
}

/// Convert share path to an absolute, slash separated, uri path
#[cfg(target_family = "unix")]
pub fn to_uri(path: &str) -> String {
    format!("/{}", segments(path).collect::<Vec<&str>>().join("/"))
}

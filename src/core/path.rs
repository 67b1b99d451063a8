//! Directory path normalization for rule paths
//!
//! Rule paths are slash-separated regardless of platform, since they end up
//! as patterns in an ignore file rather than as filesystem lookups.

/// Path separator used in rules and generated patterns
pub const SEPARATOR: char = '/';

/// The repository root
pub const ROOT: &str = "/";

/// Normalize a directory path to `/seg/seg/` form
///
/// Empty and `.` segments are dropped, `..` removes the previous segment
/// (never climbing above the root), and relative input is anchored at the
/// root. A path with no remaining segments becomes [`ROOT`].
pub fn normalize_dir_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return ROOT.to_string();
    }

    let mut normalized = String::with_capacity(path.len() + 2);
    normalized.push(SEPARATOR);
    for segment in segments {
        normalized.push_str(segment);
        normalized.push(SEPARATOR);
    }
    normalized
}

/// Ancestor prefixes of a normalized directory path, root first
///
/// Every separator strictly inside the path yields the prefix up to and
/// including it; the trailing separator is excluded, so the path itself is
/// never returned. For `/a/b/` this yields `/` then `/a/`.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    let inner = path.strip_suffix(SEPARATOR).unwrap_or(path);
    inner
        .char_indices()
        .filter(|&(_, c)| c == SEPARATOR)
        .map(move |(i, _)| &path[..=i])
}

/// Whether a normalized path is the repository root
pub fn is_root(path: &str) -> bool {
    path == ROOT
}

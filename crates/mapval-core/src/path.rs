//! # Wildcard Paths: Literal `[*]` Matching
//!
//! Source and target paths are dot-separated strings. Any segment may carry
//! the wildcard marker `[*]`, meaning "for each element of the array at this
//! position". The marker is matched as a literal substring: there is no
//! tokenizer, so unbalanced brackets or stray dots never fail, they only
//! change which helpers match.
//!
//! Every helper here splits on the *first* occurrence of the marker. Error
//! suggestions produced by the validator depend on those exact offsets.

/// The literal wildcard marker.
pub const WILDCARD: &str = "[*]";

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Returns true if `path` contains the wildcard marker anywhere.
pub fn has_wildcard(path: &str) -> bool {
    path.contains(WILDCARD)
}

/// The substring of `path` preceding its first wildcard marker.
///
/// Returns `None` when the path has no marker. The prefix may be empty
/// (`"[*].id"`), which denotes a payload that is itself an array.
pub fn root_array_path(path: &str) -> Option<&str> {
    path.find(WILDCARD).map(|idx| &path[..idx])
}

/// Number of `.`-delimited segments in `path`.
///
/// Plain string splitting: the empty string has one (empty) segment and
/// consecutive separators produce empty segments.
pub fn segment_count(path: &str) -> usize {
    path.split(SEPARATOR).count()
}

/// Remove a named array prefix from a target path.
///
/// For `"veiculos[*].id"` returns `Some("id")`: the prefix, the marker and
/// one following separator are dropped. Returns `None` if the path has no
/// marker or the prefix before the first marker is empty, since there is
/// nothing to strip in that case. The remainder may be empty
/// (`"veiculos[*]"`).
pub fn strip_wildcard_prefix(path: &str) -> Option<&str> {
    let prefix = root_array_path(path)?;
    if prefix.is_empty() {
        return None;
    }
    let rest = &path[prefix.len() + WILDCARD.len()..];
    Some(rest.strip_prefix(SEPARATOR).unwrap_or(rest))
}

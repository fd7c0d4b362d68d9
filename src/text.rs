//! Text helpers for slugs and display casing.
//!
//! A project's slug is derived exactly once from its name and determines every
//! output asset filename, so `to_slug` must stay deterministic: lowercase,
//! spaces become hyphens, everything that is not a word character or hyphen is
//! stripped. No uniqueness is enforced — two projects whose names collapse to
//! the same slug will silently overwrite each other's assets.

/// Derive a URL-safe slug from a display name.
///
/// - `"My Project!"` → `"my-project"`
/// - `"Café 42"` → `"caf-42"` (non-ASCII stripped)
///
/// Idempotent: applying it to its own output is a no-op.
pub fn to_slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Uppercase the first character only. Empty input is returned unchanged.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

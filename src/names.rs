//! Identifier rules for keys and section paths.
//!
//! A name is non-empty, starts with an ASCII letter, digit or underscore, and
//! continues with letters, digits, underscores or hyphens. A section path is a
//! `.`-separated chain of names.

/// Returns `true` if `name` is a well-formed key or path segment.
///
/// # Examples
///
/// ```rust
/// use omfl::names::is_valid_name;
///
/// assert!(is_valid_name("max-connections"));
/// assert!(is_valid_name("_private"));
/// assert!(!is_valid_name("-leading"));
/// assert!(!is_valid_name("has space"));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphanumeric() || first == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Returns `true` if `path` is a well-formed section header path such as `a.b-c.d`.
///
/// # Examples
///
/// ```rust
/// use omfl::names::is_valid_section_path;
///
/// assert!(is_valid_section_path("server.http"));
/// assert!(!is_valid_section_path("server..http"));
/// assert!(!is_valid_section_path(".server"));
/// assert!(!is_valid_section_path("server http"));
/// ```
#[must_use]
pub fn is_valid_section_path(path: &str) -> bool {
    if path.trim().is_empty() {
        return false;
    }
    if path.contains(|c| matches!(c, ' ' | '"' | '\'' | '[' | ']')) {
        return false;
    }
    if path.starts_with('.') || path.ends_with('.') || path.contains("..") {
        return false;
    }
    path.split('.').all(is_valid_name)
}

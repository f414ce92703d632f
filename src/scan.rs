//! Scanning helpers shared by the line and value parsers.
//!
//! The assignment finder and the array splitter skip quoted spans (`"..."`)
//! and backslash-escaped characters, so that `=`, `,`, `[` and `]` only have
//! structural meaning outside string literals. Comment stripping and the
//! balance pre-scan work on raw characters instead: a `#` cuts the line even
//! inside quotes unless written as `\#`, and quotes are counted as-is.

/// Iterator over the structural bytes of a fragment.
///
/// Yields `(offset, byte)` for every byte that is outside a quoted span, is not
/// itself a quote, and is not preceded by a backslash. Offsets are always on
/// char boundaries because only ASCII bytes are ever inspected by callers.
struct Structural<'a> {
    bytes: &'a [u8],
    pos: usize,
    in_string: bool,
    escaped: bool,
}

impl<'a> Structural<'a> {
    fn new(fragment: &'a str) -> Self {
        Structural {
            bytes: fragment.as_bytes(),
            pos: 0,
            in_string: false,
            escaped: false,
        }
    }
}

impl Iterator for Structural<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<(usize, u8)> {
        while let Some(&byte) = self.bytes.get(self.pos) {
            let offset = self.pos;
            self.pos += 1;
            if std::mem::take(&mut self.escaped) {
                continue;
            }
            match byte {
                b'\\' => self.escaped = true,
                b'"' => self.in_string = !self.in_string,
                _ if self.in_string => {}
                _ => return Some((offset, byte)),
            }
        }
        None
    }
}

#[inline]
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Cuts `fragment` at its first comment marker and strips surrounding blanks.
///
/// A `#` starts a comment unless it directly follows a backslash (`\#`).
/// Quotes give no protection. Blanks are spaces, tabs, carriage returns and
/// newlines.
///
/// # Examples
///
/// ```rust
/// use omfl::scan::trim;
///
/// assert_eq!(trim("  port = 80   # http\r"), "port = 80");
/// assert_eq!(trim("name = \"a#b\""), "name = \"a");
/// assert_eq!(trim("name = \"a\\#b\""), "name = \"a\\#b\"");
/// assert_eq!(trim("   # only a comment"), "");
/// ```
#[must_use]
pub fn trim(fragment: &str) -> &str {
    let bytes = fragment.as_bytes();
    let end = bytes
        .iter()
        .enumerate()
        .find(|&(i, &byte)| byte == b'#' && (i == 0 || bytes[i - 1] != b'\\'))
        .map_or(fragment.len(), |(offset, _)| offset);
    fragment[..end].trim_matches(is_blank)
}

/// Offset of the first `=` outside a quoted string.
#[must_use]
pub fn find_assignment(line: &str) -> Option<usize> {
    Structural::new(line)
        .find(|&(_, byte)| byte == b'=')
        .map(|(offset, _)| offset)
}

/// Returns `true` for a fragment of the form `[...]`.
#[inline]
#[must_use]
pub fn is_bracketed(fragment: &str) -> bool {
    fragment.len() >= 2 && fragment.starts_with('[') && fragment.ends_with(']')
}

/// Strips the outer brackets of a fragment accepted by [`is_bracketed`].
#[inline]
pub(crate) fn bracket_inner(fragment: &str) -> &str {
    &fragment[1..fragment.len() - 1]
}

/// Checks that the quote count is even and that brackets outside quotes
/// pair up.
///
/// Quotes are counted raw, so a backslash before a quote does not hide it.
/// Returns a short description of the first problem found, if any.
///
/// # Examples
///
/// ```rust
/// use omfl::scan::imbalance;
///
/// assert_eq!(imbalance("[1, [2], \"]\"]"), None);
/// assert_eq!(imbalance("\"C:\\dir\\\""), None);
/// assert_eq!(imbalance("[1, 2"), Some("unbalanced brackets"));
/// assert_eq!(imbalance("\"open"), Some("unterminated string"));
/// ```
#[must_use]
pub fn imbalance(value: &str) -> Option<&'static str> {
    let mut quotes = 0usize;
    let mut depth = 0usize;
    let mut stray_close = false;
    for byte in value.bytes() {
        match byte {
            b'"' => quotes += 1,
            _ if quotes % 2 == 1 => {}
            b'[' => depth += 1,
            b']' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => stray_close = true,
            },
            _ => {}
        }
    }
    if quotes % 2 == 1 {
        Some("unterminated string")
    } else if stray_close || depth != 0 {
        Some("unbalanced brackets")
    } else {
        None
    }
}

/// Splits the inside of an array literal at its top-level commas.
///
/// Commas nested in inner brackets or inside strings do not split. Elements
/// are returned untrimmed; the last element runs to the end of `inner`, so
/// the result is never empty.
///
/// # Examples
///
/// ```rust
/// use omfl::scan::split_elements;
///
/// assert_eq!(split_elements("1, [2, 3], \"x,y\""), vec!["1", " [2, 3]", " \"x,y\""]);
/// ```
#[must_use]
pub fn split_elements(inner: &str) -> Vec<&str> {
    let mut elements = Vec::new();
    let mut depth: isize = 0;
    let mut start = 0;
    for (offset, byte) in Structural::new(inner) {
        match byte {
            b'[' => depth += 1,
            b']' => depth -= 1,
            b',' if depth == 0 => {
                elements.push(&inner[start..offset]);
                start = offset + 1;
            }
            _ => {}
        }
    }
    elements.push(&inner[start..]);
    elements
}

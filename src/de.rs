//! Value and line decoding.
//!
//! This module turns the text to the right of `=` into a typed [`Unit`] and
//! splits `key = value` lines. Nothing here returns an error: every problem is
//! recorded on the [`ParseContext`] passed in by the caller, and decoding
//! carries on with a best-effort result (usually [`Unit::Empty`]).
//!
//! ## Type inference
//!
//! A scalar fragment is classified by the first rule that matches:
//!
//! 1. `true` / `false` → boolean
//! 2. `"..."` with exactly two quote characters → string (payload kept verbatim)
//! 3. optional sign and decimal digits → 32-bit integer
//! 4. integer part, one `.`, decimal digits → 32-bit float
//! 5. `[...]` → array, elements decoded recursively
//! 6. anything else → invalid, decoded as [`Unit::Empty`]
//!
//! ```rust
//! use omfl::de::{parse_value, ParseContext};
//! use omfl::{ParseOptions, Unit};
//!
//! let options = ParseOptions::default();
//! let mut ctx = ParseContext::new(&options);
//! assert_eq!(parse_value("-3.5", &mut ctx), Unit::Float(-3.5));
//! assert_eq!(parse_value("[1, \"a\"]", &mut ctx).len(), 2);
//! assert!(ctx.valid());
//!
//! assert_eq!(parse_value("3.", &mut ctx), Unit::Empty);
//! assert!(!ctx.valid());
//! ```

use crate::names::is_valid_name;
use crate::options::ParseOptions;
use crate::scan::{bracket_inner, find_assignment, imbalance, is_bracketed, split_elements, trim};
use crate::Unit;
use tracing::debug;

/// Mutable state threaded through a single parse.
///
/// Holds the validity flag, which starts `true` and can only ever be cleared,
/// together with the current line number used in diagnostics.
#[derive(Debug)]
pub struct ParseContext<'o> {
    valid: bool,
    line: usize,
    options: &'o ParseOptions,
}

impl<'o> ParseContext<'o> {
    #[must_use]
    pub fn new(options: &'o ParseOptions) -> Self {
        ParseContext {
            valid: true,
            line: 0,
            options,
        }
    }

    /// `false` once any check has failed.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.valid
    }

    pub(crate) fn options(&self) -> &'o ParseOptions {
        self.options
    }

    pub(crate) fn set_line(&mut self, line: usize) {
        self.line = line;
    }

    /// Folds a check into the validity flag.
    pub fn check(&mut self, ok: bool, reason: &'static str) {
        if !ok {
            self.reject(reason);
        }
    }

    /// Clears the validity flag for good.
    pub fn reject(&mut self, reason: &'static str) {
        debug!(line = self.line, reason, "rejected input");
        self.valid = false;
    }
}

/// Returns `true` for an optionally signed run of decimal digits.
#[must_use]
pub fn is_integer(text: &str) -> bool {
    let digits = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` for `<integer>.<digits>` with a single dot.
#[must_use]
pub fn is_float(text: &str) -> bool {
    if text.bytes().filter(|&b| b == b'.').count() != 1 {
        return false;
    }
    match text.split_once('.') {
        Some((whole, fraction)) => {
            is_integer(whole) && !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

fn is_quoted_string(text: &str) -> bool {
    text.len() >= 2
        && text.starts_with('"')
        && text.ends_with('"')
        && text.bytes().filter(|&b| b == b'"').count() == 2
}

/// Decodes a trimmed fragment that is not an array literal.
fn parse_scalar(text: &str, ctx: &mut ParseContext) -> Unit {
    match text {
        "true" => return Unit::Bool(true),
        "false" => return Unit::Bool(false),
        _ => {}
    }

    if is_quoted_string(text) {
        return Unit::String(text[1..text.len() - 1].to_string());
    }

    if is_integer(text) {
        return match text.parse::<i32>() {
            Ok(value) => Unit::Int(value),
            Err(_) => {
                ctx.reject("integer out of range");
                Unit::Empty
            }
        };
    }

    if is_float(text) {
        return match text.parse::<f32>() {
            Ok(value) if value.is_finite() => Unit::Float(value),
            _ => {
                ctx.reject("float out of range");
                Unit::Empty
            }
        };
    }

    ctx.reject(if text.is_empty() {
        "missing value"
    } else {
        "unrecognized value"
    });
    Unit::Empty
}

/// An array literal whose elements are still being decoded.
struct Frame<'a> {
    items: Vec<Unit>,
    pending: std::vec::IntoIter<&'a str>,
}

impl<'a> Frame<'a> {
    fn new(inner: &'a str) -> Self {
        Frame {
            items: Vec::new(),
            pending: split_elements(inner).into_iter(),
        }
    }
}

/// Decodes the inside of an array literal.
///
/// Nested arrays are handled with an explicit stack of frames rather than
/// recursion, so nesting depth costs heap, not call stack. Frames deeper
/// than [`ParseOptions::max_depth`] are not opened; the element becomes
/// [`Unit::Empty`] instead. Blank elements (`[1,,2]`, `[1,]`) are skipped.
fn parse_array(inner: &str, ctx: &mut ParseContext) -> Unit {
    let max_depth = ctx.options().max_depth;
    if max_depth == 0 {
        ctx.reject("array nesting too deep");
        return Unit::Empty;
    }

    let mut stack = vec![Frame::new(inner)];
    loop {
        let depth = stack.len();
        let Some(frame) = stack.last_mut() else {
            return Unit::Empty;
        };

        match frame.pending.next() {
            Some(element) => {
                let element = trim(element);
                if element.is_empty() {
                    continue;
                }
                if !is_bracketed(element) {
                    let unit = parse_scalar(element, ctx);
                    frame.items.push(unit);
                } else if depth >= max_depth {
                    ctx.reject("array nesting too deep");
                    frame.items.push(Unit::Empty);
                } else {
                    stack.push(Frame::new(bracket_inner(element)));
                }
            }
            None => {
                let items = stack.pop().map(|done| done.items).unwrap_or_default();
                let array = Unit::Array(items);
                match stack.last_mut() {
                    Some(parent) => parent.items.push(array),
                    None => return array,
                }
            }
        }
    }
}

/// Decodes a value fragment into a [`Unit`].
///
/// The fragment is trimmed first. A bracketed fragment is always an array,
/// even when its elements are malformed; those only clear the validity flag.
pub fn parse_value(fragment: &str, ctx: &mut ParseContext) -> Unit {
    let text = trim(fragment);
    if is_bracketed(text) {
        parse_array(bracket_inner(text), ctx)
    } else {
        parse_scalar(text, ctx)
    }
}

/// Splits a `key = value` line and decodes the value.
///
/// Returns `None` when the line has no unquoted `=`; otherwise returns the
/// trimmed key (which may have failed validation) and the decoded unit.
///
/// # Examples
///
/// ```rust
/// use omfl::de::{parse_key_value, ParseContext};
/// use omfl::{ParseOptions, Unit};
///
/// let options = ParseOptions::default();
/// let mut ctx = ParseContext::new(&options);
///
/// let (key, unit) = parse_key_value("title = \"a = b\"", &mut ctx).unwrap();
/// assert_eq!(key, "title");
/// assert_eq!(unit, Unit::from("a = b"));
///
/// assert!(parse_key_value("just words", &mut ctx).is_none());
/// assert!(!ctx.valid());
/// ```
pub fn parse_key_value<'a>(line: &'a str, ctx: &mut ParseContext) -> Option<(&'a str, Unit)> {
    let Some(eq) = find_assignment(line) else {
        ctx.reject("missing `=`");
        return None;
    };

    let key = trim(&line[..eq]);
    ctx.check(is_valid_name(key), "invalid key");

    let value = trim(&line[eq + 1..]);
    if let Some(reason) = imbalance(value) {
        ctx.reject(reason);
    }

    Some((key, parse_value(value, ctx)))
}

//! # omfl
//!
//! A parser and typed data model for OMFL, a small line-oriented configuration
//! language with dotted sections, plus renderers to XML, JSON and YAML.
//!
//! ## The language
//!
//! ```text
//! # comments run to the end of the line
//! title = "inventory"          # string: exactly two quotes, kept verbatim
//! enabled = true               # boolean
//!
//! [limits.storage]             # section header: a dotted path
//! max-items = 250              # 32-bit integer
//! ratio = -0.75                # 32-bit float
//! shelves = [1, [2, 3], "x,y"] # arrays nest and mix types
//! ```
//!
//! Keys and path segments use ASCII letters, digits, `_` and `-`, and may not
//! start with `-`. A key placed under `[a.b]` lives at `a.b.key`. A name can be
//! either a key or a section, never both.
//!
//! ## Error model
//!
//! [`parse`] never fails. Every problem (bad numbers, unbalanced brackets,
//! duplicate keys, key/section conflicts, malformed headers) clears a single
//! validity flag exposed as [`Document::valid`], and parsing carries on with
//! the next line. Malformed values are stored as [`Unit::Empty`].
//!
//! ```rust
//! use omfl::parse;
//!
//! let doc = parse("a = 1\n[a.b]\nc = 2");
//! assert!(!doc.valid());
//! assert_eq!(doc.get("a").unwrap().as_int(), Some(1));
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use omfl::{parse, Format};
//!
//! let doc = parse("[server]\nport = 8080\nhosts = [\"a\", \"b\"]");
//! assert!(doc.valid());
//!
//! let server = doc.get("server").unwrap();
//! assert_eq!(server.get("port").unwrap().as_int_or_default(80), 8080);
//! assert_eq!(doc.get("server.hosts").unwrap()[0].as_str(), Some("a"));
//! assert!(doc.get("server.hosts").unwrap()[5].is_empty());
//!
//! let json = doc.render(Format::Json);
//! assert!(json.contains("\"port\": 8080"));
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Accessors return `Option`/`Result` instead of assuming a type
//! - Array nesting is decoded without recursion and bounded by
//!   [`ParseOptions::max_depth`]
//! - Section paths are bounded by [`ParseOptions::max_path_depth`]

pub mod de;
pub mod document;
pub mod error;
pub mod macros;
pub mod map;
pub mod names;
pub mod options;
pub mod scan;
pub mod section;
pub mod ser;
pub mod value;

pub use document::Document;
pub use error::{Error, Result};
pub use map::SectionMap;
pub use options::{Format, ParseOptions, WriteOptions};
pub use section::Section;
pub use value::{Kind, Unit};

use std::io;

/// Parses OMFL text with default options.
///
/// # Examples
///
/// ```rust
/// use omfl::parse;
///
/// let doc = parse("key = 42");
/// assert!(doc.valid());
/// assert_eq!(doc.get("key").unwrap().as_int(), Some(42));
/// ```
#[must_use]
pub fn parse(text: &str) -> Document {
    Document::parse(text, &ParseOptions::default())
}

/// Parses OMFL text with custom options.
#[must_use]
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Document {
    Document::parse(text, options)
}

/// Reads all of `reader` and parses it.
///
/// # Examples
///
/// ```rust
/// use omfl::parse_reader;
/// use std::io::Cursor;
///
/// let doc = parse_reader(Cursor::new(b"[a]\nb = false")).unwrap();
/// assert_eq!(doc.get("a.b").unwrap().as_bool(), Some(false));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not UTF-8. Problems
/// with the OMFL text itself are reported by [`Document::valid`].
pub fn parse_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse(&text))
}

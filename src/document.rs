//! Parsed documents.
//!
//! A [`Document`] owns the root table of the section tree and the validity
//! flag computed while reading it. It is built once by [`parse`](crate::parse)
//! and read-only afterwards.

use crate::de::{parse_key_value, ParseContext};
use crate::names::is_valid_section_path;
use crate::options::{Format, ParseOptions, WriteOptions};
use crate::scan::{bracket_inner, is_bracketed, trim};
use crate::{ser, Result, Section};
use serde::{Serialize, Serializer};
use std::io;
use tracing::{debug, trace};

/// The result of parsing OMFL text.
///
/// # Examples
///
/// ```rust
/// use omfl::parse;
///
/// let doc = parse(r#"
///     title = "inventory"
///     [limits]
///     max-items = 250
///     weights = [0.5, 1.5]
/// "#);
///
/// assert!(doc.valid());
/// assert_eq!(doc.get("title").unwrap().as_str(), Some("inventory"));
/// assert_eq!(doc.get("limits.max-items").unwrap().as_int(), Some(250));
/// assert_eq!(doc.get("limits.weights").unwrap()[1].as_float(), Some(1.5));
/// assert!(doc.get("limits.missing").is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    root: Section,
    valid: bool,
}

impl Document {
    /// Parses `text` line by line.
    ///
    /// Never fails; see [`Document::valid`].
    #[must_use]
    pub fn parse(text: &str, options: &ParseOptions) -> Self {
        let mut ctx = ParseContext::new(options);
        let mut root = Section::default();
        let mut current_path = String::new();
        let mut lines = 0usize;

        for (index, raw) in text.lines().enumerate() {
            lines = index + 1;
            ctx.set_line(lines);

            let line = trim(raw);
            if line.is_empty() {
                continue;
            }
            trace!(line = lines, text = line, "dispatching line");

            if is_bracketed(line) {
                // An invalid header is still adopted so later keys land somewhere.
                let path = bracket_inner(line);
                ctx.check(is_valid_section_path(path), "invalid section header");
                current_path.clear();
                current_path.push_str(path);
                continue;
            }

            if let Some((key, unit)) = parse_key_value(line, &mut ctx) {
                let full_path = if current_path.is_empty() {
                    key.to_string()
                } else {
                    format!("{}.{}", current_path, key)
                };
                root.place(&full_path, unit, &mut ctx);
            }
        }

        let valid = ctx.valid();
        debug!(lines, valid, "parsed document");
        Document { root, valid }
    }

    /// `true` when no lexical or structural rule was broken anywhere in the input.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// The root table.
    #[must_use]
    pub fn root(&self) -> &Section {
        &self.root
    }

    /// Looks up the section at a dotted path such as `"server.http.port"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`](crate::Error::PathNotFound) if any
    /// segment is missing or the path descends through a key.
    pub fn get(&self, path: &str) -> Result<&Section> {
        self.root.get(path)
    }

    /// Returns `true` if [`Document::get`] would succeed for `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.root.get(path).is_ok()
    }

    /// Renders the document in `format` with default [`WriteOptions`].
    #[must_use]
    pub fn render(&self, format: Format) -> String {
        self.render_with_options(format, &WriteOptions::default())
    }

    #[must_use]
    pub fn render_with_options(&self, format: Format, options: &WriteOptions) -> String {
        ser::to_string(&self.root, format, options)
    }

    #[must_use]
    pub fn to_xml(&self) -> String {
        self.render(Format::Xml)
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        self.render(Format::Json)
    }

    #[must_use]
    pub fn to_yaml(&self) -> String {
        self.render(Format::Yaml)
    }

    /// Writes the rendering in `format` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if writing fails.
    pub fn to_writer<W>(&self, mut writer: W, format: Format, options: &WriteOptions) -> Result<()>
    where
        W: io::Write,
    {
        let rendered = self.render_with_options(format, options);
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}

//! Rendering a section tree as XML, JSON or YAML text.
//!
//! Each format is a depth-first walk over the finished tree. Tables become
//! nested containers keyed by name, leaves render their [`Unit`] by tag, and
//! nesting is indented by [`WriteOptions::indent`] spaces per level. The walk
//! never mutates or re-validates the tree; an invalid document renders
//! whatever was placed, with [`Unit::Empty`] as an empty element or `null`.
//!
//! ```rust
//! use omfl::{parse, Format};
//!
//! let doc = parse("[db]\nport = 5432\nreplicas = [1, 2]");
//! assert_eq!(
//!     doc.render(Format::Yaml),
//!     "db:\n  port: 5432\n  replicas: [1, 2]\n"
//! );
//! ```

mod json;
mod xml;
mod yaml;

use crate::{Format, Section, Unit, WriteOptions};

/// Renders `root` in `format`.
#[must_use]
pub fn to_string(root: &Section, format: Format, options: &WriteOptions) -> String {
    let mut writer = Writer::new(options);
    match format {
        Format::Xml => xml::write_document(root, &mut writer),
        Format::Json => json::write_document(root, &mut writer),
        Format::Yaml => yaml::write_document(root, &mut writer),
    }
    writer.into_inner()
}

/// Output buffer shared by the three formats.
pub(crate) struct Writer<'o> {
    output: String,
    options: &'o WriteOptions,
}

impl<'o> Writer<'o> {
    fn new(options: &'o WriteOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            options,
        }
    }

    fn into_inner(self) -> String {
        self.output
    }

    pub(crate) fn options(&self) -> &'o WriteOptions {
        self.options
    }

    /// Writes the indentation for `depth`.
    pub(crate) fn indent(&mut self, depth: usize) {
        let width = depth * self.options.indent;
        self.output.extend(std::iter::repeat(' ').take(width));
    }

    pub(crate) fn push(&mut self, ch: char) {
        self.output.push(ch);
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Writes `s` as a double-quoted string with JSON escapes, which YAML
    /// double-quoted scalars accept as well.
    pub(crate) fn write_quoted(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    self.output.push_str(&format!("\\u{:04x}", c as u32));
                }
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }

    /// Writes a unit inline, arrays as `[a, b, [c]]`.
    pub(crate) fn write_flow(&mut self, unit: &Unit) {
        match unit {
            Unit::Empty => self.push_str("null"),
            Unit::String(s) => self.write_quoted(s),
            Unit::Array(items) => {
                self.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.push_str(", ");
                    }
                    self.write_flow(item);
                }
                self.push(']');
            }
            scalar => self.write_literal(scalar),
        }
    }

    /// Writes booleans and numbers as literal text; other tags write nothing.
    pub(crate) fn write_literal(&mut self, unit: &Unit) {
        match unit {
            Unit::Bool(b) => self.push_str(if *b { "true" } else { "false" }),
            Unit::Int(i) => self.push_str(&i.to_string()),
            Unit::Float(f) => self.push_str(&format_float(*f)),
            Unit::Empty | Unit::String(_) | Unit::Array(_) => {}
        }
    }
}

/// Shortest round-trip form that always keeps a fractional part or exponent.
fn format_float(value: f32) -> String {
    format!("{:?}", value)
}

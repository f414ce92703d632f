//! Configuration options for parsing and rendering.
//!
//! - [`ParseOptions`]: limits applied while reading OMFL text
//! - [`WriteOptions`]: indentation and element naming for the serializers
//! - [`Format`]: choice of output format
//!
//! ## Examples
//!
//! ```rust
//! use omfl::{parse, Format, WriteOptions};
//!
//! let doc = parse("answer = 42");
//!
//! // Four-space indentation and a custom XML root element
//! let options = WriteOptions::new().with_indent(4).with_root_name("config");
//! let xml = doc.render_with_options(Format::Xml, &options);
//! assert!(xml.starts_with("<config>"));
//! ```

use serde::{Deserialize, Serialize};

/// Output format for a rendered document.
///
/// # Examples
///
/// ```rust
/// use omfl::Format;
///
/// assert_eq!(Format::Xml.extension(), "xml");
/// assert_eq!(Format::Json.extension(), "json");
/// assert_eq!(Format::Yaml.extension(), "yaml");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Xml,
    Json,
    Yaml,
}

impl Format {
    /// File extension conventionally used for this format, without the dot.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// All formats, in a stable order.
    pub const ALL: [Format; 3] = [Format::Xml, Format::Json, Format::Yaml];
}

/// Options controlling how OMFL text is read.
///
/// # Examples
///
/// ```rust
/// use omfl::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(2).with_max_path_depth(3);
/// assert!(parse_with_options("a = [[1]]", &options).valid());
/// assert!(!parse_with_options("a = [[[1]]]", &options).valid());
/// assert!(parse_with_options("[a.b]\nc = 1", &options).valid());
/// assert!(!parse_with_options("[a.b.c]\nd = 1", &options).valid());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum array nesting depth; the outermost array counts as 1.
    pub max_depth: usize,
    /// Maximum number of segments in the full dotted path of a key.
    pub max_path_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: 64,
            max_path_depth: 64,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum array nesting depth.
    ///
    /// Deeper arrays mark the document invalid and are replaced by an empty unit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum number of dotted path segments a key may sit under,
    /// the key itself included.
    ///
    /// Longer paths mark the document invalid and the key is not placed.
    #[must_use]
    pub fn with_max_path_depth(mut self, max_path_depth: usize) -> Self {
        self.max_path_depth = max_path_depth;
        self
    }
}

/// Options controlling serializer output.
///
/// # Examples
///
/// ```rust
/// use omfl::WriteOptions;
///
/// let options = WriteOptions::new();
/// assert_eq!(options.indent, 2);
/// assert_eq!(options.root_name, "root");
/// assert_eq!(options.item_name, "item");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Name of the XML document element.
    pub root_name: String,
    /// Placeholder name for array element positions.
    pub item_name: String,
    /// Prefix joined with `_` to a key to name an XML array container.
    pub array_prefix: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: 2,
            root_name: "root".to_string(),
            item_name: "item".to_string(),
            array_prefix: "array".to_string(),
        }
    }
}

impl WriteOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omfl::WriteOptions;
    ///
    /// let options = WriteOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    #[must_use]
    pub fn with_item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = name.into();
        self
    }

    #[must_use]
    pub fn with_array_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.array_prefix = prefix.into();
        self
    }

    /// Name of the XML container element for an array stored under `key`.
    pub(crate) fn array_container(&self, key: &str) -> String {
        format!("{}_{}", self.array_prefix, key)
    }
}

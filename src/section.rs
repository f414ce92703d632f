//! The section tree.
//!
//! A [`Section`] is either a leaf holding exactly one [`Unit`] or a table of
//! named child sections. Children are owned by their parent; traversal is
//! top-down only, so no back-pointers exist.
//!
//! ```rust
//! use omfl::parse;
//!
//! let doc = parse("[server.http]\nport = 8080");
//! let http = doc.get("server.http").unwrap();
//! assert!(http.is_table());
//! assert_eq!(http.get("port").unwrap().as_int(), Some(8080));
//! ```

use crate::de::ParseContext;
use crate::names::is_valid_name;
use crate::value::Kind;
use crate::{Error, Result, SectionMap, Unit};
use serde::{Serialize, Serializer};
use std::ops::Index;

static EMPTY: Unit = Unit::Empty;

/// A node of the section tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Section {
    /// A key with its value.
    Leaf(Unit),
    /// An interior node addressed by a dotted path segment.
    Table(SectionMap),
}

impl Default for Section {
    fn default() -> Self {
        Section::Table(SectionMap::new())
    }
}

impl Section {
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Section::Leaf(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Section::Table(_))
    }

    /// The stored value, if this is a leaf.
    #[must_use]
    pub fn unit(&self) -> Option<&Unit> {
        match self {
            Section::Leaf(unit) => Some(unit),
            Section::Table(_) => None,
        }
    }

    /// The children, if this is a table.
    #[must_use]
    pub fn as_table(&self) -> Option<&SectionMap> {
        match self {
            Section::Table(map) => Some(map),
            Section::Leaf(_) => None,
        }
    }

    /// Resolves a dotted path relative to this section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] when any segment is missing or when the
    /// path tries to descend through a leaf.
    pub fn get(&self, path: &str) -> Result<&Section> {
        let mut current = self;
        for segment in path.split('.') {
            current = current
                .as_table()
                .and_then(|map| map.get(segment))
                .ok_or_else(|| Error::path_not_found(path))?;
        }
        Ok(current)
    }

    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.unit().map_or(false, Unit::is_bool)
    }

    #[must_use]
    pub fn is_int(&self) -> bool {
        self.unit().map_or(false, Unit::is_int)
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        self.unit().map_or(false, Unit::is_float)
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        self.unit().map_or(false, Unit::is_string)
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        self.unit().map_or(false, Unit::is_array)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.unit().and_then(Unit::as_bool)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        self.unit().and_then(Unit::as_int)
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        self.unit().and_then(Unit::as_float)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.unit().and_then(Unit::as_str)
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Unit]> {
        self.unit().and_then(Unit::as_array)
    }

    #[must_use]
    pub fn as_bool_or_default(&self, fallback: bool) -> bool {
        self.as_bool().unwrap_or(fallback)
    }

    #[must_use]
    pub fn as_int_or_default(&self, fallback: i32) -> i32 {
        self.as_int().unwrap_or(fallback)
    }

    #[must_use]
    pub fn as_float_or_default(&self, fallback: f32) -> f32 {
        self.as_float().unwrap_or(fallback)
    }

    #[must_use]
    pub fn as_string_or_default<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.as_str().unwrap_or(fallback)
    }

    /// Stores `unit` as a leaf at the dotted `path` below this table.
    ///
    /// Missing intermediate tables are created. A path that runs into an
    /// existing leaf, ends on an existing name of either kind, or has more
    /// segments than [`ParseOptions::max_path_depth`] is rejected and the tree
    /// is left untouched. Each segment is name-checked without stopping the
    /// walk.
    ///
    /// [`ParseOptions::max_path_depth`]: crate::ParseOptions::max_path_depth
    pub(crate) fn place(&mut self, path: &str, unit: Unit, ctx: &mut ParseContext) {
        if path.split('.').count() > ctx.options().max_path_depth {
            ctx.reject("section path too deep");
            return;
        }

        let mut node = match self {
            Section::Table(map) => map,
            Section::Leaf(_) => {
                ctx.reject("cannot place a key below a leaf");
                return;
            }
        };

        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            ctx.check(is_valid_name(segment), "invalid path segment");

            if segments.peek().is_none() {
                if node.contains_key(segment) {
                    ctx.reject("duplicate key");
                } else {
                    node.insert(segment.to_string(), Section::Leaf(unit));
                }
                return;
            }

            node = match node.entry_table(segment) {
                Section::Table(child) => child,
                Section::Leaf(_) => {
                    ctx.reject("section path runs through an existing key");
                    return;
                }
            };
        }
    }
}

impl Index<usize> for Section {
    type Output = Unit;

    /// Indexes into an array leaf; anything else yields [`Unit::Empty`].
    fn index(&self, index: usize) -> &Unit {
        self.unit().map_or(&EMPTY, |unit| &unit[index])
    }
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Section::Leaf(unit) => unit.serialize(serializer),
            Section::Table(map) => {
                use serde::ser::SerializeMap;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (name, child) in map {
                    out.serialize_entry(name, child)?;
                }
                out.end()
            }
        }
    }
}

fn leaf_unit<'a>(section: &'a Section, expected: Kind) -> Result<&'a Unit> {
    section
        .unit()
        .ok_or_else(|| Error::type_mismatch(expected.name(), "section"))
}

impl TryFrom<&Section> for i32 {
    type Error = Error;

    fn try_from(section: &Section) -> Result<Self> {
        i32::try_from(leaf_unit(section, Kind::Int)?)
    }
}

impl TryFrom<&Section> for f32 {
    type Error = Error;

    fn try_from(section: &Section) -> Result<Self> {
        f32::try_from(leaf_unit(section, Kind::Float)?)
    }
}

impl TryFrom<&Section> for bool {
    type Error = Error;

    fn try_from(section: &Section) -> Result<Self> {
        bool::try_from(leaf_unit(section, Kind::Bool)?)
    }
}

impl TryFrom<&Section> for String {
    type Error = Error;

    fn try_from(section: &Section) -> Result<Self> {
        String::try_from(leaf_unit(section, Kind::String)?)
    }
}

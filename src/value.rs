//! Typed values stored at the leaves of a document.
//!
//! This module provides [`Unit`], the tagged value produced for every
//! `key = value` line, and [`Kind`], its bare tag.
//!
//! ## Extracting Values
//!
//! Accessors never panic. The `as_*` methods return `None` on a tag mismatch and
//! the `*_or_default` variants fall back to a caller-supplied value:
//!
//! ```rust
//! use omfl::Unit;
//!
//! let value = Unit::from(42);
//! assert_eq!(value.as_int(), Some(42));
//! assert_eq!(value.as_float(), None);
//! assert_eq!(value.as_float_or_default(1.5), 1.5);
//! ```
//!
//! ## Arrays
//!
//! Indexing an array out of range, or indexing a non-array, yields the shared
//! [`Unit::Empty`] sentinel instead of panicking:
//!
//! ```rust
//! use omfl::{unit, Unit};
//!
//! let array = unit!([1, [2, 3], "x"]);
//! assert_eq!(array[1][0].as_int(), Some(2));
//! assert!(array[7].is_empty());
//! assert!(array[1][0][0].is_empty());
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Index;

static EMPTY: Unit = Unit::Empty;

/// A single typed value.
///
/// Arrays may mix tags and nest to any depth; each unit owns its children.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Unit {
    /// Absent value, or the placeholder left behind by a malformed fragment.
    #[default]
    Empty,
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
    Array(Vec<Unit>),
}

/// The tag of a [`Unit`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Empty,
    Bool,
    Int,
    Float,
    String,
    Array,
}

impl Kind {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Empty => "empty",
            Kind::Bool => "boolean",
            Kind::Int => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Unit {
    /// Returns the tag of this unit.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Unit::Empty => Kind::Empty,
            Unit::Bool(_) => Kind::Bool,
            Unit::Int(_) => Kind::Int,
            Unit::Float(_) => Kind::Float,
            Unit::String(_) => Kind::String,
            Unit::Array(_) => Kind::Array,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Unit::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Unit::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Unit::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Unit::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Unit::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Unit::Array(_))
    }

    /// If the unit is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omfl::Unit;
    ///
    /// assert_eq!(Unit::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Unit::from(1).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Unit::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the unit is an integer, returns it. Otherwise returns `None`.
    ///
    /// Floats are not converted, even when they have no fractional part.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Unit::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Unit::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the unit is a string, returns its payload (quotes already stripped).
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Unit::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Unit]> {
        match self {
            Unit::Array(items) => Some(items),
            _ => None,
        }
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

    /// Returns the string payload, or `fallback` when the unit is not a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omfl::Unit;
    ///
    /// assert_eq!(Unit::from("eu-west").as_string_or_default("local"), "eu-west");
    /// assert_eq!(Unit::from(3).as_string_or_default("local"), "local");
    /// ```
    #[must_use]
    pub fn as_string_or_default<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.as_str().unwrap_or(fallback)
    }

    /// Returns the element at `index`, or `None` when out of range or not an array.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Unit> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Number of array elements; zero for every other tag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_array().map_or(0, <[Unit]>::len)
    }
}

impl Index<usize> for Unit {
    type Output = Unit;

    fn index(&self, index: usize) -> &Unit {
        self.get(index).unwrap_or(&EMPTY)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Empty => Ok(()),
            Unit::Bool(b) => write!(f, "{}", b),
            Unit::Int(i) => write!(f, "{}", i),
            Unit::Float(fl) => write!(f, "{:?}", fl),
            Unit::String(s) => write!(f, "\"{}\"", s),
            Unit::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Unit::Empty => serializer.serialize_unit(),
            Unit::Bool(b) => serializer.serialize_bool(*b),
            Unit::Int(i) => serializer.serialize_i32(*i),
            Unit::Float(f) => serializer.serialize_f32(*f),
            Unit::String(s) => serializer.serialize_str(s),
            Unit::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

// TryFrom implementations for extracting values from a Unit
impl TryFrom<&Unit> for i32 {
    type Error = crate::Error;

    fn try_from(value: &Unit) -> crate::Result<Self> {
        value
            .as_int()
            .ok_or_else(|| crate::Error::type_mismatch(Kind::Int.name(), value.kind().name()))
    }
}

impl TryFrom<&Unit> for f32 {
    type Error = crate::Error;

    fn try_from(value: &Unit) -> crate::Result<Self> {
        value
            .as_float()
            .ok_or_else(|| crate::Error::type_mismatch(Kind::Float.name(), value.kind().name()))
    }
}

impl TryFrom<&Unit> for bool {
    type Error = crate::Error;

    fn try_from(value: &Unit) -> crate::Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| crate::Error::type_mismatch(Kind::Bool.name(), value.kind().name()))
    }
}

impl TryFrom<&Unit> for String {
    type Error = crate::Error;

    fn try_from(value: &Unit) -> crate::Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| crate::Error::type_mismatch(Kind::String.name(), value.kind().name()))
    }
}

impl From<bool> for Unit {
    fn from(value: bool) -> Self {
        Unit::Bool(value)
    }
}

impl From<i32> for Unit {
    fn from(value: i32) -> Self {
        Unit::Int(value)
    }
}

impl From<f32> for Unit {
    fn from(value: f32) -> Self {
        Unit::Float(value)
    }
}

/// Narrows to `f32`; lets unsuffixed float literals convert.
impl From<f64> for Unit {
    fn from(value: f64) -> Self {
        Unit::Float(value as f32)
    }
}

impl From<String> for Unit {
    fn from(value: String) -> Self {
        Unit::String(value)
    }
}

impl From<&str> for Unit {
    fn from(value: &str) -> Self {
        Unit::String(value.to_string())
    }
}

impl From<Vec<Unit>> for Unit {
    fn from(value: Vec<Unit>) -> Self {
        Unit::Array(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_match_tag() {
        let units = [
            Unit::Empty,
            Unit::Bool(false),
            Unit::Int(1),
            Unit::Float(1.5),
            Unit::from("s"),
            Unit::Array(vec![]),
        ];
        for unit in &units {
            let flags = [
                unit.is_empty(),
                unit.is_bool(),
                unit.is_int(),
                unit.is_float(),
                unit.is_string(),
                unit.is_array(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{:?}", unit);
        }
    }

    #[test]
    fn test_accessors_on_mismatch() {
        let value = Unit::from("text");
        assert_eq!(value.as_int(), None);
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_int_or_default(7), 7);
        assert!(value.as_bool_or_default(true));
        assert_eq!(value.as_str(), Some("text"));
    }

    #[test]
    fn test_index_sentinel() {
        let array = Unit::Array(vec![Unit::Int(1)]);
        assert_eq!(array[0], Unit::Int(1));
        assert_eq!(array[1], Unit::Empty);
        assert_eq!(Unit::Int(5)[0], Unit::Empty);
        assert_eq!(array.len(), 1);
        assert_eq!(Unit::Int(5).len(), 0);
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(i32::try_from(&Unit::Int(-4)).unwrap(), -4);
        assert_eq!(f32::try_from(&Unit::Float(0.5)).unwrap(), 0.5);
        assert!(bool::try_from(&Unit::Bool(true)).unwrap());
        assert_eq!(String::try_from(&Unit::from("x")).unwrap(), "x");

        let err = i32::try_from(&Unit::Float(1.0)).unwrap_err();
        assert_eq!(err, crate::Error::type_mismatch("integer", "float"));
    }

    #[test]
    fn test_display() {
        let array = Unit::Array(vec![
            Unit::Int(1),
            Unit::Array(vec![Unit::Float(2.0), Unit::Bool(true)]),
            Unit::from("x"),
        ]);
        assert_eq!(array.to_string(), "[1, [2.0, true], \"x\"]");
        assert_eq!(Unit::Empty.to_string(), "");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Unit::Float(1.0).kind(), Kind::Float);
        assert_eq!(Kind::Array.to_string(), "array");
    }
}

//! Ordered child mapping for interior sections.
//!
//! [`SectionMap`] wraps an [`IndexMap`] so that serializers walk children in
//! the order they were first placed, which keeps rendered output deterministic.

use crate::Section;
use indexmap::IndexMap;

/// An ordered map of child names to owned [`Section`]s.
///
/// # Examples
///
/// ```rust
/// use omfl::{Section, SectionMap, Unit};
///
/// let mut map = SectionMap::new();
/// map.insert("first".to_string(), Section::Leaf(Unit::from(1)));
/// map.insert("second".to_string(), Section::Leaf(Unit::from(2)));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionMap(IndexMap<String, Section>);

impl SectionMap {
    #[must_use]
    pub fn new() -> Self {
        SectionMap(IndexMap::new())
    }

    /// Inserts a child, returning the previous child of that name if any.
    pub fn insert(&mut self, name: String, section: Section) -> Option<Section> {
        self.0.insert(name, section)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Section> {
        self.0.get(name)
    }

    /// Returns the child called `name`, creating an empty table if absent.
    pub fn entry_table(&mut self, name: &str) -> &mut Section {
        self.0
            .entry(name.to_string())
            .or_insert_with(|| Section::Table(SectionMap::new()))
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over child names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Section> {
        self.0.keys()
    }

    /// Returns an iterator over the name/child pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Section> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a SectionMap {
    type Item = (&'a String, &'a Section);
    type IntoIter = indexmap::map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Section)> for SectionMap {
    fn from_iter<T: IntoIterator<Item = (String, Section)>>(iter: T) -> Self {
        SectionMap(IndexMap::from_iter(iter))
    }
}

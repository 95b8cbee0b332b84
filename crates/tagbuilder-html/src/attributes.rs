//! Attribute storage for a [`TagBuilder`](crate::TagBuilder).
//!
//! Names compare case-insensitively, so `Class`, `class` and `CLASS` address
//! the same entry. Iteration follows the order in which each name was first
//! inserted; overwriting an entry keeps its position.

use indexmap::IndexMap;
use indexmap::map::Values;

/// A single attribute as it will be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// The name exactly as it was last written.
    pub name: String,
    /// The value, or `None` for a bare attribute such as `disabled`.
    pub value: Option<String>,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: Option<String>) -> Self {
        Self { name, value }
    }

    /// The value, if there is one worth rendering as `name="value"`.
    ///
    /// Both a missing value and an empty one render as a bare name.
    #[must_use]
    pub fn rendered_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|value| !value.is_empty())
    }
}

/// Case-insensitive, insertion-ordered map of attribute names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    /// Keyed by the folded form of the name.
    entries: IndexMap<String, Attribute>,
}

/// The lookup form of an attribute name.
///
/// Folds one character at a time so the result never depends on a
/// character's position (a final `Σ` folds like any other).
pub(crate) fn fold(name: &str) -> String {
    name.chars().flat_map(char::to_uppercase).collect()
}

impl AttributeMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attribute is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an attribute with this name exists, in any casing.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&fold(name))
    }

    /// Look up an attribute by name, in any casing.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.entries.get(&fold(name))
    }

    /// Mutable lookup. Changing `name` through this reference changes the
    /// rendered casing only; the entry stays addressable by its original key.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.entries.get_mut(&fold(name))
    }

    /// Store an attribute unconditionally.
    ///
    /// An existing entry that matches case-insensitively is overwritten,
    /// including the casing of its name, but keeps its position. Returns the
    /// replaced attribute, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) -> Option<Attribute> {
        let name = name.into();
        self.entries.insert(fold(&name), Attribute::new(name, value))
    }

    /// Remove an attribute by name, in any casing, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Attribute> {
        self.entries.shift_remove(&fold(name))
    }

    /// Iterate in first-insertion order.
    #[must_use]
    pub fn iter(&self) -> Values<'_, String, Attribute> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = &'a Attribute;
    type IntoIter = Values<'a, String, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

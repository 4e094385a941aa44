//! Definition records.
//!
//! A [`RawDefinition`] is what the extractor reads from a header line; a
//! [`Definition`] is the same constant after its value has been resolved to
//! an integer. [`Definitions`] keeps resolved records in header order.

use serde::Serialize;
use std::fmt;

/// An extracted `#define` whose value has not been interpreted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawDefinition {
    pub key: String,
    /// Value token exactly as written.
    pub value: String,
    /// Text of a same-line `/* ... */` comment.
    pub comment: Option<String>,
}

impl RawDefinition {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl fmt::Display for RawDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

/// A definition resolved to a concrete integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub key: String,
    pub value: i64,
    pub comment: Option<String>,
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

/// Resolved definitions in header order.
///
/// Duplicate keys are kept; [`Definitions::get`] returns the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Definitions {
    items: Vec<Definition>,
}

impl Definitions {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, definition: Definition) {
        self.items.push(definition);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Definition> {
        self.items.iter()
    }

    /// First definition with the given key.
    pub fn get(&self, key: &str) -> Option<&Definition> {
        self.items.iter().find(|d| d.key == key)
    }

    /// Definitions whose key starts with `prefix`, in header order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Definition> {
        self.items.iter().filter(move |d| d.key.starts_with(prefix))
    }

    pub fn as_slice(&self) -> &[Definition] {
        &self.items
    }
}

impl FromIterator<Definition> for Definitions {
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Definitions {
    type Item = Definition;
    type IntoIter = std::vec::IntoIter<Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Definitions {
    type Item = &'a Definition;
    type IntoIter = std::slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(key: &str, value: i64) -> Definition {
        Definition {
            key: key.to_string(),
            value,
            comment: None,
        }
    }

    #[test]
    fn test_get_returns_first_duplicate() {
        let defs: Definitions = vec![def("A", 1), def("B", 2), def("A", 3)]
            .into_iter()
            .collect();
        assert_eq!(defs.get("A").map(|d| d.value), Some(1));
        assert_eq!(defs.len(), 3);
    }

    #[test]
    fn test_with_prefix_is_case_sensitive() {
        let defs: Definitions = vec![def("ET_NONE", 0), def("et_lower", 1), def("ETX", 2)]
            .into_iter()
            .collect();
        let keys: Vec<_> = defs.with_prefix("ET_").map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["ET_NONE"]);
    }

    #[test]
    fn test_raw_display() {
        let raw = RawDefinition::new("ET_NULL", "ET_NONE");
        assert_eq!(raw.to_string(), "ET_NULL = ET_NONE");
    }
}

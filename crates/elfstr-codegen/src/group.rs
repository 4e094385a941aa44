//! Grouping of definitions by shared value.

use elfstr_defines::Definition;
use indexmap::IndexMap;

/// Separator between names that share a value.
pub const LABEL_SEPARATOR: &str = " | ";

/// All names sharing one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueGroup {
    pub value: i64,
    /// Keys in header order.
    pub keys: Vec<String>,
}

impl ValueGroup {
    /// Combined label, e.g. `"ET_NONE | ET_NULL"`.
    pub fn label(&self) -> String {
        self.keys.join(LABEL_SEPARATOR)
    }
}

/// Group definitions by value.
///
/// Groups are ordered by the first occurrence of each value, not sorted.
pub fn group_by_value<'a, I>(defs: I) -> Vec<ValueGroup>
where
    I: IntoIterator<Item = &'a Definition>,
{
    let mut groups: IndexMap<i64, Vec<String>> = IndexMap::new();
    for def in defs {
        groups.entry(def.value).or_default().push(def.key.clone());
    }

    groups
        .into_iter()
        .map(|(value, keys)| ValueGroup { value, keys })
        .collect()
}

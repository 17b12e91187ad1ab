//! StatBag - named numeric attributes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from attribute name to value
///
/// Used for both primary and secondary stats; ordered so serialized
/// output is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatBag(BTreeMap<String, f64>);

impl StatBag {
    pub fn new() -> Self {
        StatBag(BTreeMap::new())
    }

    /// Value of an attribute, 0 when absent
    pub fn get(&self, attribute: &str) -> f64 {
        self.0.get(attribute).copied().unwrap_or(0.0)
    }

    pub fn try_get(&self, attribute: &str) -> Option<f64> {
        self.0.get(attribute).copied()
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.0.contains_key(attribute)
    }

    pub(crate) fn entry_mut(&mut self, attribute: &str) -> &mut f64 {
        self.0.entry(attribute.to_string()).or_insert(0.0)
    }

    /// Truncate every value to the integer at or below it
    pub fn floor_all(&mut self) {
        for value in self.0.values_mut() {
            *value = value.floor();
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for StatBag {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        StatBag(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for StatBag {
    fn from(entries: [(K, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

//! StrategyWeights: per-vulnerability-type emphasis exchanged at every round boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat mapping from vulnerability-type tag to emphasis weight.
///
/// Owned by the coordinator and handed to the adapter by value each round.
/// The adapter only changes values of keys already present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyWeights(BTreeMap<String, f64>);

impl StrategyWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a weight. Coordinator-side construction only.
    pub fn insert(&mut self, vuln_type: impl Into<String>, weight: f64) {
        self.0.insert(vuln_type.into(), weight);
    }

    pub fn get(&self, vuln_type: &str) -> Option<f64> {
        self.0.get(vuln_type).copied()
    }

    pub fn contains(&self, vuln_type: &str) -> bool {
        self.0.contains_key(vuln_type)
    }

    /// Replace the value of an existing key. Returns false (and changes
    /// nothing) when the key is absent.
    pub fn replace_existing(&mut self, vuln_type: &str, weight: f64) -> bool {
        match self.0.get_mut(vuln_type) {
            Some(slot) => {
                *slot = weight;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for StrategyWeights {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_existing_never_creates_keys() {
        let mut weights: StrategyWeights = [("xss", 1.0)].into_iter().collect();
        assert!(weights.replace_existing("xss", 1.5));
        assert!(!weights.replace_existing("csrf", 0.5));
        assert_eq!(weights.len(), 1);
        assert_eq!(weights.get("xss"), Some(1.5));
        assert_eq!(weights.get("csrf"), None);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let weights: StrategyWeights = [("sql_injection", 1.0), ("xss", 0.8)].into_iter().collect();
        let json = serde_json::to_value(&weights).unwrap();
        assert_eq!(json, serde_json::json!({"sql_injection": 1.0, "xss": 0.8}));
    }
}

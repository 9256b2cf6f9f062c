use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-input weights of a single perceptron, keyed by input name.
///
/// Entries are created lazily the first time an input name is seen and are
/// never pruned automatically; a weight outlives its input's last appearance
/// unless the owner removes it with [`WeightStore::remove`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightStore {
    weights: BTreeMap<String, f64>,
}

impl WeightStore {
    pub fn new() -> WeightStore {
        WeightStore::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.weights.get(name).copied()
    }

    /// Returns the weight for `name`, drawing a fresh one from `U[-1, 1]`
    /// if the name has never been seen.
    pub fn get_or_init<R: Rng>(&mut self, name: &str, rng: &mut R) -> f64 {
        if let Some(&weight) = self.weights.get(name) {
            return weight;
        }
        let weight = rng.gen_range(-1.0..=1.0);
        self.weights.insert(name.to_owned(), weight);
        weight
    }

    /// Adds `delta` to the weight of `name`. A missing entry starts from 0.
    pub fn adjust(&mut self, name: &str, delta: f64) {
        *self.weights.entry(name.to_owned()).or_insert(0.0) += delta;
    }

    pub fn insert(&mut self, name: impl Into<String>, weight: f64) -> Option<f64> {
        self.weights.insert(name.into(), weight)
    }

    /// Drops the weight of an input that will no longer be fed.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.weights.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.weights.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(name, &weight)| (name.as_str(), weight))
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for WeightStore {
    fn from(pairs: [(K, f64); N]) -> WeightStore {
        WeightStore {
            weights: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

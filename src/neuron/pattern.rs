use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name of the input that is injected into every pattern on feed-forward.
///
/// Callers must not supply their own `"bias"` value: it is silently
/// overwritten with `1.0`, never rejected.
pub const BIAS: &str = "bias";

/// A set of named input values fed to a [`Perceptron`](super::Perceptron).
///
/// Values can be any real number, but the gates and the boundary renderer
/// keep them in `[0, 1]`. Names are kept in sorted order so that the weighted
/// sum is accumulated in the same order on every call.
///
/// Serializes as a plain JSON object: `{ "a": 0.0, "b": 1.0 }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    values: BTreeMap<String, f64>,
}

impl Pattern {
    pub fn new() -> Pattern {
        Pattern::default()
    }

    /// Builder-style insert, handy for composing gate inputs inline.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Pattern {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }

    /// Copy of this pattern with the bias input forced to `1.0`.
    pub(crate) fn with_bias(&self) -> Pattern {
        self.clone().with(BIAS, 1.0)
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Pattern {
    fn from(pairs: [(K, f64); N]) -> Pattern {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Pattern {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Pattern {
        Pattern {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

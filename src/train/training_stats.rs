use serde::{Deserialize, Serialize};

use crate::neuron::pattern::Pattern;

/// Counters accumulated by `train_perceptron`.
///
/// Purely diagnostic; they do not influence training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Patterns presented (one per epoch).
    pub tests: usize,
    /// Presentations whose answer disagreed with the label and triggered a
    /// weight update.
    pub errors: usize,
}

/// A pattern that the trained unit still answers wrongly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mismatch {
    pub inputs: Pattern,
    pub expectation: f64,
    pub answer: u8,
    pub output: f64,
}

/// Outcome of the acceptance pass run by `evaluate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Number of patterns checked.
    pub checked: usize,
    pub mismatches: Vec<Mismatch>,
}

impl TrainingReport {
    pub fn is_perfect(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Fraction of checked patterns answered correctly, in `[0, 1]`.
    pub fn accuracy(&self) -> f64 {
        if self.checked == 0 {
            return 0.0;
        }
        (self.checked - self.mismatches.len()) as f64 / self.checked as f64
    }
}

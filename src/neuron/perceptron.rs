use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::activation::sigmoid::{sigmoid, threshold};
use crate::neuron::pattern::Pattern;
use crate::neuron::weights::WeightStore;

pub const DEFAULT_LEARNING_RATE: f64 = 1.0;

/// A single sigmoid unit over a dynamic set of named inputs.
///
/// Usage is feed, read, correct:
///
/// ```
/// use sigmoid_neuron::{Pattern, Perceptron};
///
/// let mut p = Perceptron::seeded(3);
/// p.feed_forward(&Pattern::from([("a", 1.0), ("b", 0.0)]));
/// if p.answer() != 1 {
///     p.train(1.0);
/// }
/// ```
///
/// Every pattern gets an extra `"bias"` input fixed to `1.0`; a caller
/// supplied `"bias"` is overwritten. New input names are picked up on the
/// fly with a random weight in `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct Perceptron {
    weights: WeightStore,
    /// Last fed pattern, bias included. Kept so `train` can correct it.
    last_input: Pattern,
    learning_rate: f64,
    output: f64,
    rng: StdRng,
}

impl Perceptron {
    /// Fresh unit with the default learning rate and an entropy-seeded source
    /// for weight initialization.
    pub fn new() -> Perceptron {
        Perceptron::with_rng(DEFAULT_LEARNING_RATE, StdRng::from_entropy())
    }

    pub fn with_learning_rate(learning_rate: f64) -> Perceptron {
        Perceptron::with_rng(learning_rate, StdRng::from_entropy())
    }

    /// Deterministic weight initialization, for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Perceptron {
        Perceptron::with_rng(DEFAULT_LEARNING_RATE, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(learning_rate: f64, rng: StdRng) -> Perceptron {
        Perceptron {
            weights: WeightStore::new(),
            last_input: Pattern::new(),
            learning_rate,
            output: 0.0,
            rng,
        }
    }

    /// Starts from known weights. Inputs missing from `weights` are still
    /// initialized randomly (seed 0) when first fed.
    pub fn from_weights(weights: WeightStore, learning_rate: f64) -> Perceptron {
        Perceptron {
            weights,
            ..Perceptron::with_rng(learning_rate, StdRng::seed_from_u64(0))
        }
    }

    /// Feeds `pattern` through the unit and returns the sigmoid of the
    /// weighted sum, in `(0, 1)`.
    ///
    /// The pattern (plus bias) is remembered as the input a following
    /// [`train`](Self::train) call corrects.
    pub fn feed_forward(&mut self, pattern: &Pattern) -> f64 {
        self.last_input = pattern.with_bias();
        self.activate()
    }

    /// `1` if the last output is above `0.5`, otherwise `0`.
    pub fn answer(&self) -> u8 {
        threshold(self.output)
    }

    /// Pulls the weights of the last fed inputs towards `expectation` and
    /// returns the output recomputed with the new weights.
    ///
    /// The step is the plain delta rule `w += rate * (expectation - output) * x`,
    /// without the sigmoid derivative factor.
    ///
    /// # Panics
    /// Panics if called before any [`feed_forward`](Self::feed_forward).
    pub fn train(&mut self, expectation: f64) -> f64 {
        assert!(
            !self.last_input.is_empty(),
            "train() called before feed_forward()"
        );

        let error = expectation - self.output;
        for (name, value) in self.last_input.iter() {
            self.weights.adjust(name, self.learning_rate * error * value);
        }

        self.activate()
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn weights(&self) -> &WeightStore {
        &self.weights
    }

    /// Direct access to the weights, e.g. to drop an input that is no longer fed.
    pub fn weights_mut(&mut self) -> &mut WeightStore {
        &mut self.weights
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn last_input(&self) -> &Pattern {
        &self.last_input
    }

    fn activate(&mut self) -> f64 {
        let mut sum = 0.0;
        for (name, value) in self.last_input.iter() {
            sum += self.weights.get_or_init(name, &mut self.rng) * value;
        }
        self.output = sigmoid(sum);
        self.output
    }
}

impl Default for Perceptron {
    fn default() -> Perceptron {
        Perceptron::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neuron::pattern::BIAS;

    fn known() -> Perceptron {
        Perceptron::from_weights(WeightStore::from([("a", 2.0), ("b", 1.0), (BIAS, -2.0)]), 1.0)
    }

    #[test]
    fn feed_forward_computes_sigmoid_of_weighted_sum() {
        let mut p = known();
        // 2*1 + 1*1 - 2 = 1
        let out = p.feed_forward(&Pattern::from([("a", 1.0), ("b", 1.0)]));
        assert!((out - sigmoid(1.0)).abs() < 1e-12);
        assert_eq!(p.answer(), 1);
        // -2 only
        let out = p.feed_forward(&Pattern::from([("a", 0.0), ("b", 0.0)]));
        assert!((out - sigmoid(-2.0)).abs() < 1e-12);
        assert_eq!(p.answer(), 0);
    }

    #[test]
    fn zero_sum_answers_zero() {
        let mut p = known();
        // 2*1 + 1*0 - 2 = 0 -> exactly 0.5, not above the threshold
        assert_eq!(p.feed_forward(&Pattern::from([("a", 1.0), ("b", 0.0)])), 0.5);
        assert_eq!(p.answer(), 0);
    }

    #[test]
    fn caller_bias_is_overwritten() {
        let mut p = known();
        let plain = p.feed_forward(&Pattern::from([("a", 1.0)]));
        let spoofed = p.feed_forward(&Pattern::from([("a", 1.0), (BIAS, 50.0)]));
        assert_eq!(plain, spoofed);
        assert_eq!(p.last_input().get(BIAS), Some(1.0));
    }

    #[test]
    fn train_applies_delta_rule() {
        let mut p = known();
        let out = p.feed_forward(&Pattern::from([("a", 1.0), ("b", 0.0)]));
        assert_eq!(out, 0.5);
        p.train(1.0);
        // error = 0.5; a and bias move by 0.5, b has input 0 and stays.
        assert_eq!(p.weights().get("a"), Some(2.5));
        assert_eq!(p.weights().get("b"), Some(1.0));
        assert_eq!(p.weights().get(BIAS), Some(-1.5));
        assert!((p.output() - sigmoid(1.0)).abs() < 1e-12);
    }

    #[test]
    fn learning_rate_scales_step() {
        let mut p = Perceptron::from_weights(WeightStore::from([("a", 0.0), (BIAS, 0.0)]), 0.1);
        p.feed_forward(&Pattern::from([("a", 1.0)]));
        p.train(0.0);
        assert!((p.weights().get("a").unwrap() - -0.05).abs() < 1e-12);
        assert!((p.weights().get(BIAS).unwrap() - -0.05).abs() < 1e-12);
    }

    #[test]
    fn train_returns_refed_output() {
        let mut p = Perceptron::seeded(11);
        let pattern = Pattern::from([("x", 0.7), ("y", 0.2)]);
        p.feed_forward(&pattern);
        let trained = p.train(1.0);
        let again = p.feed_forward(&pattern);
        assert_eq!(trained, again);
    }

    #[test]
    #[should_panic(expected = "before feed_forward")]
    fn train_without_feed_panics() {
        Perceptron::seeded(0).train(1.0);
    }

    #[test]
    fn seeded_units_initialize_identically() {
        let pattern = Pattern::from([("a", 1.0), ("b", 0.5)]);
        let mut p1 = Perceptron::seeded(42);
        let mut p2 = Perceptron::seeded(42);
        assert_eq!(p1.feed_forward(&pattern), p2.feed_forward(&pattern));
        assert_eq!(p1.weights(), p2.weights());
    }
}

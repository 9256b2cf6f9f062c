use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::neuron::perceptron::Perceptron;
use crate::train::dataset::LabeledPattern;
use crate::train::train_config::TrainConfig;
use crate::train::training_stats::{Mismatch, TrainingReport, TrainingStats};

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Online training: `epochs` times, picks one pattern uniformly at random,
/// feeds it forward and calls `train` with the label only when the answer
/// is wrong. Correct answers leave the weights alone.
///
/// # Panics
/// Panics if `patterns` is empty.
pub fn train_perceptron<R: Rng>(
    perceptron: &mut Perceptron,
    patterns: &[LabeledPattern],
    epochs: usize,
    rng: &mut R,
) -> TrainingStats {
    assert!(!patterns.is_empty(), "patterns must not be empty");

    let mut stats = TrainingStats::default();

    for epoch in 0..epochs {
        let sample = &patterns[rng.gen_range(0..patterns.len())];

        perceptron.feed_forward(&sample.inputs);
        let answer = perceptron.answer();
        stats.tests += 1;

        if f64::from(answer) != sample.expectation {
            stats.errors += 1;
            let output = perceptron.train(sample.expectation);
            debug!(epoch, answer, expectation = sample.expectation, output, "corrected");
        }
    }

    info!(tests = stats.tests, errors = stats.errors, "training finished");
    stats
}

/// Builds a fresh perceptron from `config`, trains it on `patterns` and
/// returns it with its counters. A seeded config is fully reproducible.
///
/// # Panics
/// Panics if `patterns` is empty.
pub fn train_with_config(patterns: &[LabeledPattern], config: &TrainConfig) -> (Perceptron, TrainingStats) {
    let mut sampler = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let init = StdRng::seed_from_u64(sampler.gen());
    let mut perceptron = Perceptron::with_rng(config.learning_rate, init);

    let stats = train_perceptron(&mut perceptron, patterns, config.epochs, &mut sampler);
    (perceptron, stats)
}

/// Acceptance pass: feeds every pattern once, in order, and collects the
/// ones whose answer differs from the label. Weights are not changed, but
/// inputs never seen before get their random initial weight.
pub fn evaluate(perceptron: &mut Perceptron, patterns: &[LabeledPattern]) -> TrainingReport {
    let mut report = TrainingReport { checked: patterns.len(), mismatches: Vec::new() };

    for sample in patterns {
        let output = perceptron.feed_forward(&sample.inputs);
        let answer = perceptron.answer();
        if f64::from(answer) != sample.expectation {
            report.mismatches.push(Mismatch {
                inputs: sample.inputs.clone(),
                expectation: sample.expectation,
                answer,
                output,
            });
        }
    }

    if !report.is_perfect() {
        warn!(
            checked = report.checked,
            mismatches = report.mismatches.len(),
            "perceptron does not reproduce its training set"
        );
    }
    report
}

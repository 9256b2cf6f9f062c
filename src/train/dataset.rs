use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::neuron::pattern::Pattern;

/// One row of a training set: named inputs plus the expected answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPattern {
    pub inputs: Pattern,
    pub expectation: f64,
}

impl LabeledPattern {
    pub fn new(inputs: Pattern, expectation: f64) -> LabeledPattern {
        LabeledPattern { inputs, expectation }
    }
}

/// Reads a training set from a JSON file of the form
/// `[{ "inputs": { "a": 0, "b": 1 }, "expectation": 1 }, ...]`.
///
/// An empty array is rejected with [`Error::EmptyPatternSet`].
pub fn load_patterns_json(path: &str) -> Result<Vec<LabeledPattern>> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let patterns: Vec<LabeledPattern> = serde_json::from_reader(reader)?;
    if patterns.is_empty() {
        return Err(Error::EmptyPatternSet);
    }
    Ok(patterns)
}

/// Writes a training set as pretty-printed JSON, readable by `load_patterns_json`.
pub fn save_patterns_json(patterns: &[LabeledPattern], path: &str) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, patterns)?;
    Ok(())
}

use std::f64::consts::E;

/// Output level above which a unit is considered to have fired.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Logistic sigmoid, mapping any weighted sum into (0, 1).
///
/// Roughly 1 at +4 and 0 at -4. A hard `sum > 0` step would work for the
/// gates as well, but the soft output is what the update rule trains against.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Collapses a sigmoid output into a binary answer: `1` iff `output > 0.5`.
pub fn threshold(output: f64) -> u8 {
    if output > DECISION_THRESHOLD { 1 } else { 0 }
}

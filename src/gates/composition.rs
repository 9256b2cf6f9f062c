use tracing::info;

use crate::gates::gate::Gate;
use crate::neuron::pattern::Pattern;
use crate::neuron::perceptron::Perceptron;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{evaluate, train_with_config};
use crate::train::training_stats::TrainingStats;

/// Trains a fresh perceptron on `gate`'s truth table.
///
/// `Xor` is accepted mechanically but will not converge.
pub fn train_gate(gate: Gate, config: &TrainConfig) -> (Perceptron, TrainingStats) {
    let (perceptron, stats) = train_with_config(&gate.truth_table(), config);
    info!(%gate, tests = stats.tests, errors = stats.errors, "gate trained");
    (perceptron, stats)
}

/// Feeds binary inputs to a trained unit and returns its thresholded answer.
pub fn fire(unit: &mut Perceptron, inputs: &Pattern) -> u8 {
    unit.feed_forward(inputs);
    unit.answer()
}

/// Independently trained AND, OR and NOT units, wired together to compute
/// gates no single unit can learn.
#[derive(Debug, Clone)]
pub struct GateSet {
    and: Perceptron,
    or: Perceptron,
    not: Perceptron,
}

impl GateSet {
    /// Trains the three units. With a seeded config each unit gets its own
    /// seed (`seed`, `seed + 1`, `seed + 2`) so the runs stay independent.
    pub fn train(config: &TrainConfig) -> GateSet {
        let for_unit = |offset: u64| TrainConfig {
            seed: config.seed.map(|seed| seed.wrapping_add(offset)),
            ..config.clone()
        };
        GateSet {
            and: train_gate(Gate::And, &for_unit(0)).0,
            or: train_gate(Gate::Or, &for_unit(1)).0,
            not: train_gate(Gate::Not, &for_unit(2)).0,
        }
    }

    pub fn from_units(and: Perceptron, or: Perceptron, not: Perceptron) -> GateSet {
        GateSet { and, or, not }
    }

    /// True when every unit reproduces its own truth table.
    pub fn verify(&mut self) -> bool {
        evaluate(&mut self.and, &Gate::And.truth_table()).is_perfect()
            && evaluate(&mut self.or, &Gate::Or.truth_table()).is_perfect()
            && evaluate(&mut self.not, &Gate::Not.truth_table()).is_perfect()
    }

    pub fn and(&mut self, a: u8, b: u8) -> u8 {
        fire(&mut self.and, &binary(a, b))
    }

    pub fn or(&mut self, a: u8, b: u8) -> u8 {
        fire(&mut self.or, &binary(a, b))
    }

    pub fn not(&mut self, a: u8) -> u8 {
        fire(&mut self.not, &Pattern::from([("a", f64::from(a))]))
    }

    /// `(NOT a AND b) OR (a AND NOT b)`, evaluated one unit at a time with
    /// each intermediate answer fed on as a named input. No learning happens.
    pub fn xor(&mut self, a: u8, b: u8) -> u8 {
        let not_a = self.not(a);
        let left = self.and(not_a, b);

        let not_b = self.not(b);
        let right = self.and(a, not_b);

        self.or(left, right)
    }

    /// Dispatches to the unit (or composition) computing `gate`.
    /// `Nand` and `Nor` are composed with NOT; `b` is ignored for `Not`.
    pub fn eval(&mut self, gate: Gate, a: u8, b: u8) -> u8 {
        match gate {
            Gate::And => self.and(a, b),
            Gate::Or => self.or(a, b),
            Gate::Nand => {
                let and = self.and(a, b);
                self.not(and)
            }
            Gate::Nor => {
                let or = self.or(a, b);
                self.not(or)
            }
            Gate::Not => self.not(a),
            Gate::Xor => self.xor(a, b),
        }
    }

    pub fn and_unit(&self) -> &Perceptron {
        &self.and
    }

    pub fn or_unit(&self) -> &Perceptron {
        &self.or
    }

    pub fn not_unit(&self) -> &Perceptron {
        &self.not
    }
}

fn binary(a: u8, b: u8) -> Pattern {
    Pattern::from([("a", f64::from(a)), ("b", f64::from(b))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neuron::pattern::BIAS;
    use crate::neuron::weights::WeightStore;

    fn unit(a: f64, b: f64, bias: f64) -> Perceptron {
        Perceptron::from_weights(WeightStore::from([("a", a), ("b", b), (BIAS, bias)]), 1.0)
    }

    /// Hand-set weights that realize the gates exactly.
    fn handmade() -> GateSet {
        GateSet::from_units(unit(4.0, 4.0, -6.0), unit(4.0, 4.0, -2.0), unit(-4.0, 0.0, 2.0))
    }

    #[test]
    fn handmade_units_verify() {
        assert!(handmade().verify());
    }

    #[test]
    fn xor_from_handmade_units() {
        let mut gates = handmade();
        assert_eq!(gates.xor(0, 0), 0);
        assert_eq!(gates.xor(0, 1), 1);
        assert_eq!(gates.xor(1, 0), 1);
        assert_eq!(gates.xor(1, 1), 0);
    }

    #[test]
    fn eval_covers_every_gate() {
        let mut gates = handmade();
        for gate in [Gate::And, Gate::Or, Gate::Nand, Gate::Nor, Gate::Not, Gate::Xor] {
            for (a, b) in [(0u8, 0u8), (0, 1), (1, 0), (1, 1)] {
                let expected = gate.eval(a == 1, b == 1) as u8;
                assert_eq!(gates.eval(gate, a, b), expected, "{gate}({a}, {b})");
            }
        }
    }
}

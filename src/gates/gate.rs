use std::fmt;

use serde::{Deserialize, Serialize};

use crate::neuron::pattern::Pattern;
use crate::train::dataset::LabeledPattern;

/// Boolean gates over inputs named `a` (and `b` for the binary ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    And,
    Or,
    Nand,
    Nor,
    Not,
    /// Not linearly separable: a single unit cannot learn it. See `GateSet::xor`.
    Xor,
}

impl Gate {
    /// Gates that one perceptron can learn on its own.
    pub const LEARNABLE: [Gate; 5] = [Gate::And, Gate::Or, Gate::Nand, Gate::Nor, Gate::Not];

    pub fn arity(self) -> usize {
        match self {
            Gate::Not => 1,
            _ => 2,
        }
    }

    pub fn is_linearly_separable(self) -> bool {
        self != Gate::Xor
    }

    /// Reference boolean semantics. `b` is ignored for `Not`.
    pub fn eval(self, a: bool, b: bool) -> bool {
        match self {
            Gate::And => a && b,
            Gate::Or => a || b,
            Gate::Nand => !(a && b),
            Gate::Nor => !(a || b),
            Gate::Not => !a,
            Gate::Xor => a ^ b,
        }
    }

    /// Full truth table as a training set, inputs in `{0, 1}`.
    pub fn truth_table(self) -> Vec<LabeledPattern> {
        let label = |on: bool| if on { 1.0 } else { 0.0 };
        if self.arity() == 1 {
            return [false, true]
                .into_iter()
                .map(|a| LabeledPattern::new(Pattern::from([("a", label(a))]), label(self.eval(a, false))))
                .collect();
        }
        [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(|(a, b)| {
                LabeledPattern::new(Pattern::from([("a", label(a)), ("b", label(b))]), label(self.eval(a, b)))
            })
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Nand => "NAND",
            Gate::Nor => "NOR",
            Gate::Not => "NOT",
            Gate::Xor => "XOR",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

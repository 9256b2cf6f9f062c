pub mod composition;
pub mod gate;

pub use composition::{fire, train_gate, GateSet};
pub use gate::Gate;

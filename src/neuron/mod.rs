pub mod pattern;
pub mod perceptron;
pub mod weights;

pub use pattern::{Pattern, BIAS};
pub use perceptron::{Perceptron, DEFAULT_LEARNING_RATE};
pub use weights::WeightStore;

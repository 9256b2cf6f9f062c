//! A single sigmoid perceptron over named inputs, trained online with the
//! delta rule, and the boolean gates it can learn.

pub mod activation;
pub mod error;
pub mod gates;
pub mod neuron;
pub mod render;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, threshold};
pub use error::{Error, Result};
pub use gates::{Gate, GateSet};
pub use neuron::{Pattern, Perceptron, WeightStore, BIAS};
pub use render::{render_boundary, save_boundary_png, RenderConfig};
pub use train::{evaluate, train_perceptron, train_with_config, LabeledPattern, TrainConfig, TrainingReport, TrainingStats};

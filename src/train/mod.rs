pub mod dataset;
pub mod train_config;
pub mod trainer;
pub mod training_stats;

pub use dataset::{load_patterns_json, save_patterns_json, LabeledPattern};
pub use train_config::TrainConfig;
pub use trainer::{evaluate, train_perceptron, train_with_config};
pub use training_stats::{Mismatch, TrainingReport, TrainingStats};

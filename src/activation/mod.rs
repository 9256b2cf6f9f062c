pub mod sigmoid;

pub use sigmoid::{sigmoid, threshold, DECISION_THRESHOLD};

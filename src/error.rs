/// Errors raised at the fallible edges of the crate: file I/O, JSON decoding,
/// PNG encoding and configuration validation.
///
/// The perceptron itself never fails; its numeric operations are total.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("pattern set is empty")]
    EmptyPatternSet,

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

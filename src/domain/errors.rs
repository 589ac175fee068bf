use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a model artifact from disk
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model artifact not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read model artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize model artifact {path:?}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model artifact schema drift: {0}")]
    Schema(#[from] EncodingError),
}

/// Errors related to turning form selections into model input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("Unknown season: {0}")]
    UnknownSeason(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Feature schema mismatch: expected [{expected}], got [{actual}]")]
    SchemaMismatch { expected: String, actual: String },
}

/// Errors raised during a single forecast
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Matrix creation failed: {0}")]
    Matrix(String),

    #[error("Prediction failed: {0}")]
    Inference(String),

    #[error("No prediction returned")]
    EmptyOutput,

    #[error("Model returned a non-finite prediction: {0}")]
    NonFinitePrediction(f64),

    #[error("Prediction {0} is outside the displayable range")]
    OutOfRange(f64),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors raised while loading data, training, or persisting a classifier.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("model file not found: {}", .0.display())]
    ModelNotFound(PathBuf),

    /// The named operation needs a trained model.
    #[error("model must be trained before calling `{0}`")]
    NotTrained(&'static str),

    #[error("test fraction must lie strictly between 0 and 1, got {0}")]
    InvalidSplit(f64),

    #[error("expected {expected} features per sample, found {found}")]
    FeatureMismatch { expected: usize, found: usize },

    #[error("got {samples} samples but {labels} labels")]
    LengthMismatch { samples: usize, labels: usize },

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("label {0} is not a known class")]
    UnknownLabel(usize),

    #[error("line {line}: cannot parse `{value}` as a number")]
    InvalidValue { line: u64, value: String },

    #[error("model fitting failed: {0}")]
    Fit(String),

    #[error(transparent)]
    Linfa(#[from] linfa::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

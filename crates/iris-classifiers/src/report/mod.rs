//! Evaluation metrics and the printable classification report.
pub mod metrics;
pub mod report;

pub use metrics::ConfusionMatrix;
pub use report::{ClassReport, ClassificationReport};

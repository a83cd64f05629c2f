//! iris-classifiers: train, persist and query a classifier on the Iris dataset.
//!
//! The crate wraps a multinomial logistic regression from `linfa-logistic`
//! behind [`IrisClassifier`], which tracks whether a model has been trained and
//! handles JSON persistence. Dataset loading and the seeded train/test split
//! live in [`data_handling`]; evaluation metrics and the text report in
//! [`report`].
pub mod classifier;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod models;
pub mod report;

pub use classifier::{Evaluation, IrisClassifier};
pub use data_handling::{load_iris_data, target_names, DatasetSplit};
pub use error::{ClassifierError, Result};

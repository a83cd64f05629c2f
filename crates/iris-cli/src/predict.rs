//! The prediction routine behind `iris-predict`.
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ndarray::Array2;

use iris_classifiers::data_handling::{target_names, FEATURE_NAMES, NUM_FEATURES};
use iris_classifiers::io::read_samples_csv;
use iris_classifiers::{ClassifierError, IrisClassifier};

use crate::util::{format_features, validate_csv_file};
use crate::DEFAULT_MODEL_PATH;

/// Samples shown when no input file is given: setosa, virginica, versicolor.
pub const EXAMPLES: [[f64; NUM_FEATURES]; 3] = [
    [5.1, 3.5, 1.4, 0.2],
    [6.7, 3.0, 5.2, 2.3],
    [5.9, 3.0, 4.2, 1.5],
];

pub const MODEL_NOT_FOUND_MESSAGE: &str = "Model not found. Please run iris-train first.";

#[derive(Debug, Clone)]
pub struct PredictOptions {
    pub model_path: PathBuf,
    /// CSV of samples to predict instead of [`EXAMPLES`].
    pub input: Option<PathBuf>,
}

impl Default for PredictOptions {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            input: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictOutcome {
    /// No model at the configured path; the user was told to train first.
    ModelMissing,
    /// Number of samples predicted.
    Predicted(usize),
}

/// Load the model and print a prediction with class probabilities for each
/// sample. A missing model is reported on `out` and is not an error.
pub fn run_prediction<W: Write>(options: &PredictOptions, out: &mut W) -> Result<PredictOutcome> {
    writeln!(out, "Iris Classifier Prediction")?;

    let classifier: IrisClassifier = match IrisClassifier::from_file(&options.model_path) {
        Ok(classifier) => classifier,
        Err(ClassifierError::ModelNotFound(path)) => {
            log::warn!("No model at {}", path.display());
            writeln!(out, "{}", MODEL_NOT_FOUND_MESSAGE)?;
            return Ok(PredictOutcome::ModelMissing);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to load model: {}", options.model_path.display())
            })
        }
    };
    writeln!(out, "Model loaded successfully!")?;

    let samples = match &options.input {
        Some(path) => {
            validate_csv_file(path)?;
            read_samples_csv(path)
                .with_context(|| format!("Failed to read samples: {}", path.display()))?
        }
        None => Array2::from_shape_vec((EXAMPLES.len(), NUM_FEATURES), EXAMPLES.concat())?,
    };

    if samples.nrows() == 0 {
        writeln!(out, "\nNo samples to predict.")?;
        return Ok(PredictOutcome::Predicted(0));
    }

    let labels = classifier.predict(&samples)?;
    let probabilities = classifier.predict_proba(&samples)?;
    let names = target_names();

    writeln!(out, "\nExample Predictions:")?;
    writeln!(out, "Features: [{}]", FEATURE_NAMES.join(", "))?;

    for (i, ((row, &label), proba)) in samples
        .rows()
        .into_iter()
        .zip(labels.iter())
        .zip(probabilities.rows())
        .enumerate()
    {
        writeln!(out, "\nExample {}: {}", i + 1, format_features(&row.to_vec()))?;
        writeln!(out, "Prediction: {}", names[label])?;
        writeln!(out, "Probabilities:")?;
        for (name, p) in names.iter().zip(proba.iter()) {
            writeln!(out, "  {}: {:.4}", name, p)?;
        }
    }

    Ok(PredictOutcome::Predicted(samples.nrows()))
}

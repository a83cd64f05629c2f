use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use iris_classifiers::{load_iris_data, IrisClassifier};

use crate::train::input::TrainConfig;

/// Outcome of a training run.
#[derive(Debug, Clone)]
pub struct TrainingSummary {
    pub accuracy: f64,
    pub n_train: usize,
    pub n_test: usize,
    pub output_file: PathBuf,
}

/// Split the data, train, evaluate on the held-out rows and save the model.
pub fn run_training<W: Write>(config: &TrainConfig, out: &mut W) -> Result<TrainingSummary> {
    writeln!(out, "Iris Classifier Training")?;

    let split = load_iris_data(config.test_size, config.seed)
        .context("Failed to load the Iris dataset")?;
    writeln!(
        out,
        "Training samples: {}, test samples: {}",
        split.n_train(),
        split.n_test()
    )?;

    let mut classifier = IrisClassifier::with_config(config.model.clone());
    classifier
        .train(&split.x_train, &split.y_train)
        .context("Training failed")?;

    let evaluation = classifier.evaluate(&split.x_test, &split.y_test)?;
    writeln!(out, "\nAccuracy: {:.4}\n", evaluation.accuracy)?;
    write!(out, "{}", evaluation.report)?;

    classifier.save(&config.output_file).with_context(|| {
        format!("Failed to save model: {}", config.output_file.display())
    })?;
    writeln!(out, "\nModel saved to {}", config.output_file.display())?;

    Ok(TrainingSummary {
        accuracy: evaluation.accuracy,
        n_train: split.n_train(),
        n_test: split.n_test(),
        output_file: config.output_file.clone(),
    })
}

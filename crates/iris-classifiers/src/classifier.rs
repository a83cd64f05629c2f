//! The `IrisClassifier` wrapper: owns one model and tracks whether it has
//! been trained.
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ModelConfig;
use crate::data_handling::{target_names, NUM_CLASSES, NUM_FEATURES};
use crate::error::{ClassifierError, Result};
use crate::models::{ClassifierModel, LogisticRegressionModel};
use crate::report::ClassificationReport;

/// Result of [`IrisClassifier::evaluate`].
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Fraction of correctly classified samples, in `[0, 1]`.
    pub accuracy: f64,
    pub report: ClassificationReport,
}

/// Iris classifier over a pluggable [`ClassifierModel`], logistic regression by default.
pub struct IrisClassifier<M: ClassifierModel = LogisticRegressionModel> {
    model: M,
    is_trained: bool,
}

impl IrisClassifier {
    /// Untrained classifier with the default model configuration.
    pub fn new() -> Self {
        Self::with_model(LogisticRegressionModel::default())
    }

    pub fn with_config(config: ModelConfig) -> Self {
        Self::with_model(LogisticRegressionModel::new(config))
    }
}

impl Default for IrisClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ClassifierModel> IrisClassifier<M> {
    pub fn with_model(model: M) -> Self {
        IrisClassifier {
            model,
            is_trained: false,
        }
    }

    pub fn is_trained(&self) -> bool {
        self.is_trained
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Fit the underlying model. On failure the classifier keeps its
    /// previous trained state.
    pub fn train(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        check_labelled(x, y)?;

        log::info!(
            "Training {} on {} samples",
            self.model.name(),
            x.nrows()
        );
        self.model.fit(x, y)?;
        self.is_trained = true;
        Ok(())
    }

    /// Predict one label per row of `x`, in input order.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        self.ensure_trained("predict")?;
        check_features(x)?;
        self.model.predict(x)
    }

    /// Class probabilities, one row per sample and one column per label.
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.ensure_trained("predict_proba")?;
        check_features(x)?;
        self.model.predict_proba(x)
    }

    /// Score the classifier on labelled data.
    pub fn evaluate(&self, x: &Array2<f64>, y: &Array1<usize>) -> Result<Evaluation> {
        self.ensure_trained("evaluate")?;
        check_labelled(x, y)?;

        let y_pred = self.predict(x)?;
        let report = ClassificationReport::new(y, &y_pred, target_names())?;
        log::info!("Evaluation accuracy: {:.4}", report.accuracy);

        Ok(Evaluation {
            accuracy: report.accuracy,
            report,
        })
    }

    fn ensure_trained(&self, op: &'static str) -> Result<()> {
        if self.is_trained {
            Ok(())
        } else {
            Err(ClassifierError::NotTrained(op))
        }
    }
}

impl<M: ClassifierModel + Serialize> IrisClassifier<M> {
    /// Write the trained model to `path` as JSON, creating parent
    /// directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.ensure_trained("save")?;
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &self.model)?;
        log::info!("Saved model to {}", path.display());
        Ok(())
    }
}

impl<M: ClassifierModel + DeserializeOwned> IrisClassifier<M> {
    /// Replace the model with the one stored at `path` and mark the
    /// classifier trained.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.model = read_model(path.as_ref())?;
        self.is_trained = true;
        Ok(())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let model = read_model(path.as_ref())?;
        Ok(IrisClassifier {
            model,
            is_trained: true,
        })
    }
}

fn read_model<M: DeserializeOwned>(path: &Path) -> Result<M> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ClassifierError::ModelNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    let model = serde_json::from_reader(BufReader::new(file))?;
    log::info!("Loaded model from {}", path.display());
    Ok(model)
}

fn check_features(x: &Array2<f64>) -> Result<()> {
    if x.ncols() != NUM_FEATURES {
        return Err(ClassifierError::FeatureMismatch {
            expected: NUM_FEATURES,
            found: x.ncols(),
        });
    }
    Ok(())
}

/// Shared checks for `train` and `evaluate`.
fn check_labelled(x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
    check_features(x)?;
    if x.nrows() != y.len() {
        return Err(ClassifierError::LengthMismatch {
            samples: x.nrows(),
            labels: y.len(),
        });
    }
    if x.nrows() == 0 {
        return Err(ClassifierError::EmptyDataset);
    }
    if let Some(&label) = y.iter().find(|&&l| l >= NUM_CLASSES) {
        return Err(ClassifierError::UnknownLabel(label));
    }
    Ok(())
}

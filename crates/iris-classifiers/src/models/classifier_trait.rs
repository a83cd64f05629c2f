use ndarray::{Array1, Array2};

use crate::error::Result;

/// Contract shared by the classifier backends. Labels are class codes in
/// `0..NUM_CLASSES`; features are one sample per row.
pub trait ClassifierModel {
    /// Fit the model to `x` and `y`, replacing any previous fit.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()>;

    /// Predict one class label per row of `x`.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>>;

    /// Per-class probabilities, one row per sample and one column per class.
    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}

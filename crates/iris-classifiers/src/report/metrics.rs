use std::collections::HashMap;

use linfa::dataset::{AsTargets, Labels};
use linfa::metrics::{self as linfa_metrics, ToConfusionMatrix};
use ndarray::{Array1, ArrayView1, Ix1};

use crate::error::{ClassifierError, Result};

/// True labels paired with the full class list. linfa takes the matrix
/// members from the labels of the receiver, so listing `0..n_classes` here
/// keeps every class present and in label order.
struct ClassTargets<'a> {
    targets: ArrayView1<'a, usize>,
    n_classes: usize,
}

impl AsTargets for ClassTargets<'_> {
    type Elem = usize;
    type Ix = Ix1;

    fn as_targets(&self) -> ArrayView1<'_, usize> {
        self.targets.view()
    }
}

impl Labels for ClassTargets<'_> {
    type Elem = usize;

    fn label_count(&self) -> Vec<HashMap<usize, usize>> {
        self.targets.label_count()
    }

    fn labels(&self) -> Vec<usize> {
        (0..self.n_classes).collect()
    }
}

/// Confusion matrix over labels `0..n_classes`, backed by linfa's
/// [`ConfusionMatrix`](linfa_metrics::ConfusionMatrix). Rows are true
/// labels, columns are predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    accuracy: f64,
    one_vs_all: Vec<linfa_metrics::ConfusionMatrix<bool>>,
    support: Vec<usize>,
    total: usize,
}

impl ConfusionMatrix {
    pub fn from_labels(
        y_true: &Array1<usize>,
        y_pred: &Array1<usize>,
        n_classes: usize,
    ) -> Result<Self> {
        if let Some(&label) = y_true
            .iter()
            .chain(y_pred.iter())
            .find(|&&l| l >= n_classes)
        {
            return Err(ClassifierError::UnknownLabel(label));
        }

        // linfa indexes the label slices directly
        let y_true = y_true.as_standard_layout();
        let y_pred = y_pred.as_standard_layout();
        let truth = ClassTargets {
            targets: y_true.view(),
            n_classes,
        };

        let matrix = truth.confusion_matrix(&y_pred).map_err(|e| match e {
            linfa::Error::MismatchedShapes(labels, samples) => {
                ClassifierError::LengthMismatch { samples, labels }
            }
            other => other.into(),
        })?;
        if y_true.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }

        let counts = truth.label_count().into_iter().next().unwrap_or_default();
        let support = (0..n_classes)
            .map(|k| counts.get(&k).copied().unwrap_or(0))
            .collect();

        Ok(ConfusionMatrix {
            accuracy: score(matrix.accuracy()),
            one_vs_all: matrix.split_one_vs_all(),
            support,
            total: y_true.len(),
        })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Number of samples whose true label is `class`.
    pub fn support(&self, class: usize) -> usize {
        self.support[class]
    }

    pub fn precision(&self, class: usize) -> f64 {
        score(self.one_vs_all[class].precision())
    }

    pub fn recall(&self, class: usize) -> f64 {
        score(self.one_vs_all[class].recall())
    }

    pub fn f1_score(&self, class: usize) -> f64 {
        score(self.one_vs_all[class].f1_score())
    }
}

// 0/0 comes back from linfa as NaN and is reported as 0.0
fn score(value: f32) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        f64::from(value)
    }
}

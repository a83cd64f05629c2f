use std::fmt;

use ndarray::Array1;

use crate::error::Result;
use crate::report::metrics::ConfusionMatrix;

/// Scores for a single class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassReport {
    pub name: String,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub support: usize,
}

/// Per-class precision/recall/F1 table with accuracy and averages.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    pub classes: Vec<ClassReport>,
    pub accuracy: f64,
    pub macro_avg: ClassReport,
    pub weighted_avg: ClassReport,
    pub confusion: ConfusionMatrix,
}

impl ClassificationReport {
    /// Fails when the label arrays differ in length, are empty, or hold a
    /// label without a name in `class_names`.
    pub fn new(
        y_true: &Array1<usize>,
        y_pred: &Array1<usize>,
        class_names: &[&str],
    ) -> Result<Self> {
        let confusion = ConfusionMatrix::from_labels(y_true, y_pred, class_names.len())?;

        let classes: Vec<ClassReport> = class_names
            .iter()
            .enumerate()
            .map(|(k, name)| ClassReport {
                name: name.to_string(),
                precision: confusion.precision(k),
                recall: confusion.recall(k),
                f1_score: confusion.f1_score(k),
                support: confusion.support(k),
            })
            .collect();

        let total = confusion.total();
        let n = classes.len() as f64;
        let macro_avg = ClassReport {
            name: "macro avg".to_string(),
            precision: classes.iter().map(|c| c.precision).sum::<f64>() / n,
            recall: classes.iter().map(|c| c.recall).sum::<f64>() / n,
            f1_score: classes.iter().map(|c| c.f1_score).sum::<f64>() / n,
            support: total,
        };

        let weighted = |f: fn(&ClassReport) -> f64| -> f64 {
            classes
                .iter()
                .map(|c| f(c) * c.support as f64)
                .sum::<f64>()
                / total as f64
        };
        let weighted_avg = ClassReport {
            name: "weighted avg".to_string(),
            precision: weighted(|c| c.precision),
            recall: weighted(|c| c.recall),
            f1_score: weighted(|c| c.f1_score),
            support: total,
        };

        Ok(ClassificationReport {
            accuracy: confusion.accuracy(),
            classes,
            macro_avg,
            weighted_avg,
            confusion,
        })
    }
}

const DIGITS: usize = 2;

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(|c| c.name.len())
            .chain(std::iter::once(self.weighted_avg.name.len()))
            .max()
            .unwrap_or(0);

        let row = |f: &mut fmt::Formatter<'_>, c: &ClassReport| {
            writeln!(
                f,
                "{:>width$}  {:>9.digits$} {:>9.digits$} {:>9.digits$} {:>9}",
                c.name,
                c.precision,
                c.recall,
                c.f1_score,
                c.support,
                width = width,
                digits = DIGITS,
            )
        };

        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9} {:>9}",
            "",
            "precision",
            "recall",
            "f1-score",
            "support",
            width = width,
        )?;
        writeln!(f)?;
        for class in &self.classes {
            row(f, class)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9.digits$} {:>9}",
            "accuracy",
            "",
            "",
            self.accuracy,
            self.confusion.total(),
            width = width,
            digits = DIGITS,
        )?;
        row(f, &self.macro_avg)?;
        row(f, &self.weighted_avg)
    }
}

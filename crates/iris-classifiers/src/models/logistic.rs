use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_logistic::{MultiFittedLogisticRegression, MultiLogisticRegression};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::config::{ModelConfig, ModelType};
use crate::data_handling::NUM_CLASSES;
use crate::error::{ClassifierError, Result};
use crate::models::classifier_trait::ClassifierModel;

/// Multinomial logistic regression classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegressionModel {
    params: ModelConfig,
    model: Option<MultiFittedLogisticRegression<f64, usize>>,
}

impl LogisticRegressionModel {
    pub fn new(params: ModelConfig) -> Self {
        LogisticRegressionModel {
            params,
            model: None,
        }
    }

    pub fn params(&self) -> &ModelConfig {
        &self.params
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    fn fitted(&self, op: &'static str) -> Result<&MultiFittedLogisticRegression<f64, usize>> {
        self.model.as_ref().ok_or(ClassifierError::NotTrained(op))
    }
}

impl Default for LogisticRegressionModel {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

impl ClassifierModel for LogisticRegressionModel {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        let ModelType::LogisticRegression {
            alpha,
            gradient_tolerance,
            fit_intercept,
        } = self.params.model_type;

        let dataset = Dataset::new(x.to_owned(), y.to_owned());

        let fitted = MultiLogisticRegression::<f64>::default()
            .alpha(alpha)
            .gradient_tolerance(gradient_tolerance)
            .with_intercept(fit_intercept)
            .max_iterations(self.params.max_iterations)
            .fit(&dataset)
            .map_err(|e| ClassifierError::Fit(e.to_string()))?;

        self.model = Some(fitted);
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        let fitted = self.fitted("predict")?;
        let labels: Array1<usize> = fitted.predict(x);
        Ok(labels)
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let fitted = self.fitted("predict_proba")?;
        let raw = fitted.predict_probabilities(x);

        // Columns of `raw` follow the classes seen during fit; spread them
        // onto the fixed label layout so absent classes read as 0.
        let mut proba = Array2::<f64>::zeros((x.nrows(), NUM_CLASSES));
        for (col, &class) in fitted.classes().iter().enumerate() {
            if class >= NUM_CLASSES {
                return Err(ClassifierError::UnknownLabel(class));
            }
            proba.column_mut(class).assign(&raw.column(col));
        }
        Ok(proba)
    }

    fn name(&self) -> &str {
        self.params.model_type.name()
    }
}

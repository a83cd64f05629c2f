use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for models in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Upper bound on optimizer iterations.
    pub max_iterations: u64,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ModelType {
    /// Multinomial logistic regression with an L2 penalty of strength `alpha`.
    LogisticRegression {
        alpha: f64,
        gradient_tolerance: f64,
        fit_intercept: bool,
    },
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::LogisticRegression {
            alpha: 1.0,
            gradient_tolerance: 1e-4,
            fit_intercept: true,
        }
    }
}

impl ModelType {
    pub fn name(&self) -> &'static str {
        match self {
            ModelType::LogisticRegression { .. } => "logistic_regression",
        }
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logistic" | "logreg" | "logistic_regression" => Ok(ModelType::default()),
            _ => Err(format!(
                "Unknown model type: {}. Valid options are: logistic_regression",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(max_iterations: u64, model_type: ModelType) -> Self {
        Self {
            max_iterations,
            model_type,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            model_type: ModelType::default(),
        }
    }
}

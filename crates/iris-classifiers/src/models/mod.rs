pub mod classifier_trait;
pub mod logistic;

pub use classifier_trait::ClassifierModel;
pub use logistic::LogisticRegressionModel;

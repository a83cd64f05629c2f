//! Loading and splitting the Iris dataset.
//!
//! The 150-row dataset ships with `linfa-datasets`; this module shuffles its
//! rows with a seeded RNG and carves off a test partition so that the same
//! `(test_size, seed)` pair always reproduces the same split.
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{ClassifierError, Result};

/// Number of feature columns per sample.
pub const NUM_FEATURES: usize = 4;

/// Number of distinct class labels.
pub const NUM_CLASSES: usize = 3;

pub const DEFAULT_TEST_SIZE: f64 = 0.2;
pub const DEFAULT_SEED: u64 = 42;

pub const FEATURE_NAMES: [&str; NUM_FEATURES] =
    ["sepal length", "sepal width", "petal length", "petal width"];

const TARGET_NAMES: [&str; NUM_CLASSES] = ["setosa", "versicolor", "virginica"];

/// Class display names, indexed by label.
pub fn target_names() -> &'static [&'static str; NUM_CLASSES] {
    &TARGET_NAMES
}

/// Train/test partitions of the dataset.
#[derive(Debug, Clone)]
pub struct DatasetSplit {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<usize>,
    pub y_test: Array1<usize>,
}

impl DatasetSplit {
    pub fn n_train(&self) -> usize {
        self.x_train.nrows()
    }

    pub fn n_test(&self) -> usize {
        self.x_test.nrows()
    }

    pub fn n_samples(&self) -> usize {
        self.n_train() + self.n_test()
    }

    pub fn log_summary(&self) {
        log::debug!(
            "Split Iris data: {} training and {} test samples",
            self.n_train(),
            self.n_test()
        );
    }
}

/// Load the Iris dataset and split it into training and test partitions.
///
/// # Arguments
///
/// * `test_size` - Fraction of rows placed in the test partition, strictly between 0 and 1.
/// * `seed` - Seed for the row shuffle.
///
/// # Returns
///
/// A `DatasetSplit` whose test partition holds `ceil(test_size * 150)` rows.
pub fn load_iris_data(test_size: f64, seed: u64) -> Result<DatasetSplit> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(ClassifierError::InvalidSplit(test_size));
    }

    let iris = linfa_datasets::iris();
    let records = iris.records;
    let targets = iris.targets;
    let n_samples = records.nrows();

    let n_test = (test_size * n_samples as f64).ceil() as usize;
    if n_test == 0 || n_test >= n_samples {
        return Err(ClassifierError::InvalidSplit(test_size));
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    let (test_idx, train_idx) = indices.split_at(n_test);

    let split = DatasetSplit {
        x_train: records.select(Axis(0), train_idx),
        x_test: records.select(Axis(0), test_idx),
        y_train: targets.select(Axis(0), train_idx),
        y_test: targets.select(Axis(0), test_idx),
    };
    split.log_summary();

    Ok(split)
}

/// `load_iris_data` with `DEFAULT_TEST_SIZE` and `DEFAULT_SEED`.
pub fn load_iris_data_default() -> Result<DatasetSplit> {
    load_iris_data(DEFAULT_TEST_SIZE, DEFAULT_SEED)
}

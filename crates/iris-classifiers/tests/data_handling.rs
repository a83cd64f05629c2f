//! Integration tests for dataset loading and the seeded train/test split.

use std::collections::HashSet;

use ndarray::Axis;

use iris_classifiers::data_handling::{
    load_iris_data, load_iris_data_default, target_names, DEFAULT_TEST_SIZE, NUM_FEATURES,
};
use iris_classifiers::ClassifierError;

#[test]
fn data_loading_defaults() {
    let split = load_iris_data_default().unwrap();

    assert_eq!(split.x_train.ncols(), NUM_FEATURES);
    assert_eq!(split.n_samples(), 150);
    assert_eq!(split.n_test(), (DEFAULT_TEST_SIZE * 150.0).ceil() as usize);

    let classes: HashSet<usize> = split.y_train.iter().copied().collect();
    assert_eq!(classes.len(), 3);
}

#[test]
fn sizes_and_labels_hold_across_fractions_and_seeds() {
    for &fraction in &[0.1, 0.25, 0.3, 0.5, 0.75, 0.9] {
        for seed in [0u64, 1, 42, 12345] {
            let split = load_iris_data(fraction, seed).unwrap();
            assert_eq!(split.n_train() + split.n_test(), 150);
            assert_eq!(split.x_train.nrows(), split.y_train.len());
            assert_eq!(split.x_test.nrows(), split.y_test.len());
            assert_eq!(split.x_train.ncols(), 4);
            assert_eq!(split.x_test.ncols(), 4);
            assert!(split.y_train.iter().chain(split.y_test.iter()).all(|&l| l < 3));
        }
    }
}

#[test]
fn same_seed_reproduces_split() {
    let a = load_iris_data(0.3, 42).unwrap();
    let b = load_iris_data(0.3, 42).unwrap();

    assert_eq!(a.x_train, b.x_train);
    assert_eq!(a.x_test, b.x_test);
    assert_eq!(a.y_train, b.y_train);
    assert_eq!(a.y_test, b.y_test);
}

#[test]
fn different_seeds_shuffle_differently() {
    let a = load_iris_data(0.3, 1).unwrap();
    let b = load_iris_data(0.3, 2).unwrap();
    assert_ne!(a.x_test, b.x_test);
}

#[test]
fn partitions_cover_every_row_once() {
    let split = load_iris_data(0.3, 42).unwrap();

    // compared as multisets; the dataset has a few duplicate rows
    let key = |row: ndarray::ArrayView1<f64>, label: usize| -> String {
        format!("{:?}|{}", row.to_vec(), label)
    };
    let mut all: Vec<String> = split
        .x_train
        .axis_iter(Axis(0))
        .zip(split.y_train.iter())
        .map(|(r, &l)| key(r, l))
        .chain(
            split
                .x_test
                .axis_iter(Axis(0))
                .zip(split.y_test.iter())
                .map(|(r, &l)| key(r, l)),
        )
        .collect();
    all.sort();

    let full = load_iris_data(0.5, 7).unwrap();
    let mut reference: Vec<String> = full
        .x_train
        .axis_iter(Axis(0))
        .zip(full.y_train.iter())
        .map(|(r, &l)| key(r, l))
        .chain(
            full.x_test
                .axis_iter(Axis(0))
                .zip(full.y_test.iter())
                .map(|(r, &l)| key(r, l)),
        )
        .collect();
    reference.sort();

    assert_eq!(all.len(), 150);
    assert_eq!(all, reference);
}

#[test]
fn invalid_fraction_is_rejected() {
    assert!(matches!(
        load_iris_data(1.0, 42),
        Err(ClassifierError::InvalidSplit(f)) if f == 1.0
    ));
    assert!(load_iris_data(0.0, 42).is_err());
}

#[test]
fn class_names_are_ordered() {
    let names = target_names();
    assert_eq!(names.len(), 3);
    assert_eq!(names[0], "setosa");
    assert_eq!(names[2], "virginica");
}

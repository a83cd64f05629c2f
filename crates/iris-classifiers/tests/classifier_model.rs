//! Integration tests for the `IrisClassifier` train / predict / evaluate /
//! save / load lifecycle.

use ndarray::{array, s};

use iris_classifiers::data_handling::{load_iris_data, target_names, DatasetSplit, NUM_CLASSES};
use iris_classifiers::{ClassifierError, IrisClassifier};

fn split() -> DatasetSplit {
    load_iris_data(0.3, 42).expect("failed to load iris data")
}

fn trained(split: &DatasetSplit) -> IrisClassifier {
    let mut classifier = IrisClassifier::new();
    classifier
        .train(&split.x_train, &split.y_train)
        .expect("training failed");
    classifier
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn model_initialization() {
    let classifier = IrisClassifier::new();
    assert!(!classifier.is_trained());
    assert_eq!(classifier.model().params().max_iterations, 200);
}

#[test]
fn model_training() {
    let data = split();
    let classifier = trained(&data);
    assert!(classifier.is_trained());
}

#[test]
fn model_prediction() {
    let data = split();
    let classifier = trained(&data);

    let first_five = data.x_test.slice(s![..5, ..]).to_owned();
    let predictions = classifier.predict(&first_five).unwrap();
    assert_eq!(predictions.len(), 5);
    assert!(predictions.iter().all(|&p| p < NUM_CLASSES));
}

#[test]
fn model_probabilities_sum_to_one() {
    let data = split();
    let classifier = trained(&data);

    let proba = classifier.predict_proba(&data.x_test).unwrap();
    assert_eq!(proba.dim(), (data.n_test(), NUM_CLASSES));
    for row in proba.rows() {
        assert!((row.sum() - 1.0).abs() < 1e-9, "row sums to {}", row.sum());
        assert!(row.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }
}

#[test]
fn predicted_label_is_most_probable_class() {
    let data = split();
    let classifier = trained(&data);

    let labels = classifier.predict(&data.x_test).unwrap();
    let proba = classifier.predict_proba(&data.x_test).unwrap();
    for (label, row) in labels.iter().zip(proba.rows()) {
        let argmax = row
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(*label, argmax);
    }
}

#[test]
fn model_evaluation() {
    let data = split();
    let classifier = trained(&data);

    let evaluation = classifier.evaluate(&data.x_test, &data.y_test).unwrap();
    assert!((0.0..=1.0).contains(&evaluation.accuracy));
    assert!(evaluation.accuracy > 0.8, "accuracy {}", evaluation.accuracy);

    let text = evaluation.report.to_string();
    assert!(text.to_lowercase().contains("precision"));
    for name in target_names() {
        assert!(text.contains(name));
    }
}

#[test]
fn setosa_example_is_recognised() {
    let data = split();
    let classifier = trained(&data);

    let sample = array![[5.1, 3.5, 1.4, 0.2]];
    let label = classifier.predict(&sample).unwrap()[0];
    assert_eq!(target_names()[label], "setosa");
}

#[test]
fn prediction_rejects_wrong_width() {
    let data = split();
    let classifier = trained(&data);

    let wide = array![[5.1, 3.5, 1.4, 0.2, 9.9]];
    assert!(matches!(
        classifier.predict(&wide),
        Err(ClassifierError::FeatureMismatch { expected: 4, found: 5 })
    ));
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn model_save_load() {
    let data = split();
    let classifier = trained(&data);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_model.json");
    classifier.save(&path).unwrap();
    assert!(path.exists());

    let mut loaded = IrisClassifier::new();
    loaded.load(&path).unwrap();
    assert!(loaded.is_trained());

    let first_five = data.x_test.slice(s![..5, ..]).to_owned();
    assert_eq!(
        classifier.predict(&first_five).unwrap(),
        loaded.predict(&first_five).unwrap()
    );
    assert_eq!(
        classifier.predict(&data.x_test).unwrap(),
        loaded.predict(&data.x_test).unwrap()
    );
}

#[test]
fn from_file_reproduces_probabilities() {
    let data = split();
    let classifier = trained(&data);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("model.json");
    classifier.save(&path).unwrap();

    let loaded: IrisClassifier = IrisClassifier::from_file(&path).unwrap();
    let a = classifier.predict_proba(&data.x_test).unwrap();
    let b = loaded.predict_proba(&data.x_test).unwrap();
    for (p, q) in a.iter().zip(b.iter()) {
        assert!((p - q).abs() < 1e-12);
    }
}

#[test]
fn load_missing_file_is_model_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let mut classifier = IrisClassifier::new();
    match classifier.load(&path) {
        Err(ClassifierError::ModelNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected ModelNotFound, got {:?}", other.err()),
    }
    assert!(!classifier.is_trained());
}

#[test]
fn load_corrupt_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result: Result<IrisClassifier, _> = IrisClassifier::from_file(&path);
    assert!(matches!(result, Err(ClassifierError::Json(_))));
}

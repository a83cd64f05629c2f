//! CSV reader for feature rows to run through a trained classifier.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use ndarray::Array2;

use crate::data_handling::NUM_FEATURES;
use crate::error::{ClassifierError, Result};

/// Read samples from a comma-separated file with a header row and exactly
/// `NUM_FEATURES` numeric columns.
pub fn read_samples_csv<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let file = File::open(path.as_ref())?;
    read_samples_from_reader(file)
}

/// Same as [`read_samples_csv`] over any reader.
pub fn read_samples_from_reader<R: Read>(rdr: R) -> Result<Array2<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    let mut values = Vec::new();
    let mut n_rows = 0;
    for record in reader.records() {
        let record = record?;
        if record.len() != NUM_FEATURES {
            return Err(ClassifierError::FeatureMismatch {
                expected: NUM_FEATURES,
                found: record.len(),
            });
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        for field in record.iter() {
            let value = field.parse::<f64>().map_err(|_| ClassifierError::InvalidValue {
                line,
                value: field.to_string(),
            })?;
            values.push(value);
        }
        n_rows += 1;
    }

    log::debug!("Read {} samples from CSV", n_rows);
    Ok(Array2::from_shape_vec((n_rows, NUM_FEATURES), values)?)
}

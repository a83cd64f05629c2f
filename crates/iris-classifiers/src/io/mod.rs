pub mod samples_csv;

pub use samples_csv::{read_samples_csv, read_samples_from_reader};

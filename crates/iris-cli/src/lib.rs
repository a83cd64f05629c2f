//! Support library for the `iris-train` and `iris-predict` binaries.
use log::LevelFilter;

pub mod predict;
pub mod train;
pub mod util;

/// Where `iris-train` writes and `iris-predict` reads the model by default.
pub const DEFAULT_MODEL_PATH: &str = "models/iris_classifier.json";

/// Route `log` output to stderr, filtered by the `IRIS_LOG` variable.
pub fn init_logging() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("IRIS_LOG", "error,iris=info"))
        .init();
}

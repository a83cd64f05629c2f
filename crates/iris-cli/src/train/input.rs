use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use iris_classifiers::config::{ModelConfig, ModelType};
use iris_classifiers::data_handling::{DEFAULT_SEED, DEFAULT_TEST_SIZE};

use crate::DEFAULT_MODEL_PATH;

/// Parameters for a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub model: ModelConfig,
    pub test_size: f64,
    pub seed: u64,
    pub output_file: PathBuf,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            test_size: DEFAULT_TEST_SIZE,
            seed: DEFAULT_SEED,
            output_file: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

/// Load a training configuration from a JSON file.
pub fn load_train_config<P: AsRef<Path>>(path: P) -> Result<TrainConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: TrainConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

impl TrainConfig {
    /// Build the config from an optional file and apply CLI overrides.
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.get_one::<PathBuf>("config") {
            Some(path) => {
                log::info!("Training from config: {}", path.display());
                load_train_config(path)?
            }
            None => TrainConfig::default(),
        };

        if let Some(test_size) = matches.get_one::<f64>("test_size") {
            config.test_size = *test_size;
        }

        if let Some(seed) = matches.get_one::<u64>("seed") {
            config.seed = *seed;
        }

        if let Some(output_file) = matches.get_one::<PathBuf>("output_file") {
            config.output_file = output_file.clone();
        }

        if let Some(model_type) = matches.get_one::<String>("model_type") {
            config.model.model_type = ModelType::from_str(model_type).map_err(anyhow::Error::msg)?;
        }

        if let Some(max_iterations) = matches.get_one::<u64>("max_iterations") {
            config.model.max_iterations = *max_iterations;
        }

        Ok(config)
    }
}

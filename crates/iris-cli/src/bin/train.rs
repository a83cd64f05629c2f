use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command, ValueHint};

use iris_cli::train::{run_training, TrainConfig};

fn main() -> Result<()> {
    iris_cli::init_logging();

    let matches = Command::new("iris-train")
        .version(clap::crate_version!())
        .about("Train the Iris classifier, report test accuracy and save the model")
        .arg(
            Arg::new("config")
                .help("Path to training JSON configuration file")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("test_size")
                .short('t')
                .long("test-size")
                .help("Fraction of samples held out for evaluation. Overrides the configuration file.")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for the train/test shuffle. Overrides the configuration file.")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help("File path the trained model will be written to. Overrides the configuration file.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("model_type")
                .long("model-type")
                .help("Override the model type from the JSON config.")
                .value_parser(["logistic_regression"])
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("max_iterations")
                .long("max-iterations")
                .help("Override the optimizer iteration limit.")
                .value_parser(clap::value_parser!(u64)),
        )
        .get_matches();

    let config = TrainConfig::from_arguments(&matches)?;
    if matches.get_one::<PathBuf>("config").is_none() {
        let default_json = serde_json::to_string_pretty(&config).unwrap_or_default();
        eprintln!("No config file provided; using:\n{}", default_json);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_training(&config, &mut out) {
        Ok(summary) => {
            log::info!(
                "Trained on {} samples, test accuracy {:.4}",
                summary.n_train,
                summary.accuracy
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Training failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

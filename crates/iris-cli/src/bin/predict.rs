use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command, ValueHint};

use iris_cli::predict::{run_prediction, PredictOptions};

fn main() -> Result<()> {
    iris_cli::init_logging();

    let matches = Command::new("iris-predict")
        .version(clap::crate_version!())
        .about("Predict Iris species with a previously trained model")
        .arg(
            Arg::new("model_path")
                .short('m')
                .long("model")
                .help("Path to the trained model file (*.json). Defaults to models/iris_classifier.json")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("CSV file of samples to predict (header row, four numeric columns). Defaults to built-in examples")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let mut options = PredictOptions::default();
    if let Some(model_path) = matches.get_one::<PathBuf>("model_path") {
        options.model_path = model_path.clone();
    }
    options.input = matches.get_one::<PathBuf>("input").cloned();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_prediction(&options, &mut out)?;
    Ok(())
}

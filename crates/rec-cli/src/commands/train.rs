//! Train command implementation.

use std::path::Path;

use colored::Colorize;
use recomendar::pipeline::train::{self, TrainConfig};

use crate::error::CliError;

/// Run the train command
pub(crate) fn run(
    data: &Path,
    test_size: f32,
    seed: u64,
    n_neighbors: usize,
) -> Result<(), CliError> {
    println!("Training on {}...", data.display());

    let config = TrainConfig {
        processed_data: data.to_path_buf(),
        test_size,
        random_state: seed,
        n_neighbors,
    };
    let report = train::run(&config)?;

    println!(
        "{} fitted {n_neighbors}-NN on {} rows ({} held out, {} features)",
        "ok:".green().bold(),
        report.n_train,
        report.n_test,
        report.n_features
    );
    println!(
        "{} fitted state is not persisted; the descriptor file carries constructor parameters only",
        "note:".yellow().bold()
    );
    Ok(())
}

//! Evaluate command implementation.

use std::path::Path;

use colored::Colorize;
use recomendar::pipeline::evaluate::{self, EvaluateConfig};

use crate::error::CliError;

/// Run the evaluate command
pub(crate) fn run(model: &Path, data: &Path) -> Result<(), CliError> {
    println!(
        "Evaluating {} on {}...",
        model.display(),
        data.display()
    );

    let config = EvaluateConfig {
        model: model.to_path_buf(),
        test_data: data.to_path_buf(),
    };
    let accuracy = evaluate::run(&config)?;

    println!("{} accuracy: {accuracy:.4}", "ok:".green().bold());
    Ok(())
}

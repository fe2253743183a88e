//! Prepare command implementation.

use std::path::Path;

use colored::Colorize;
use recomendar::pipeline::prepare::{self, PrepareConfig};

use crate::error::CliError;

/// Run the prepare command
pub(crate) fn run(interactions: &Path, metadata: &Path, out: &Path) -> Result<(), CliError> {
    println!(
        "Preparing {} + {}...",
        interactions.display(),
        metadata.display()
    );

    let config = PrepareConfig {
        interactions: interactions.to_path_buf(),
        film_metadata: metadata.to_path_buf(),
        output: out.to_path_buf(),
    };
    let report = prepare::run(&config)?;

    println!(
        "{} wrote {} ({} rows x {} columns)",
        "ok:".green().bold(),
        out.display(),
        report.n_rows,
        report.n_cols
    );
    Ok(())
}

//! Predict command implementation.

use std::path::Path;

use colored::Colorize;
use recomendar::pipeline::predict::{self, PredictConfig};

use crate::error::CliError;

/// Run the predict command
pub(crate) fn run(user_id: u32, model: &Path, data: &Path) -> Result<(), CliError> {
    println!(
        "Recommending for user {user_id} from {}...",
        model.display()
    );

    let config = PredictConfig {
        model: model.to_path_buf(),
        user_data: data.to_path_buf(),
    };
    let recommendations = predict::run(&config, user_id)?;

    println!(
        "{} {} history rows queried",
        "ok:".green().bold(),
        recommendations.n_history_rows
    );
    for (row, (distances, indices)) in recommendations
        .neighbors
        .distances
        .iter()
        .zip(&recommendations.neighbors.indices)
        .enumerate()
    {
        println!("  history row {row}:");
        for (d, i) in distances.as_slice().iter().zip(indices) {
            println!("    item #{i}  distance {d:.4}");
        }
    }
    Ok(())
}

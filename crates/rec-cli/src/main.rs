//! rec - Film Recommendation Pipeline CLI
//!
//! Runs the four file-coupled pipeline stages. Each stage reads the files
//! the previous one wrote; there is no coordination beyond the filesystem.
//!
//! Usage:
//!   rec prepare                       # Raw JSON feeds -> processed CSV
//!   rec train                         # Fit the neighbor model (not persisted)
//!   rec predict --user-id 123         # 6 nearest neighbors for a user
//!   rec evaluate                      # Exact-match accuracy on held-out data

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;

use commands::{evaluate, predict, prepare, train};

/// rec - Film Recommendation Pipeline Tool
#[derive(Parser)]
#[command(name = "rec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the flat processed table from the raw JSON feeds
    Prepare {
        /// Record-oriented JSON interaction feed
        #[arg(long, default_value = "ml/data/interactionData.json")]
        interactions: PathBuf,

        /// Record-oriented JSON film metadata
        #[arg(long, default_value = "ml/data/filmMetadata.json")]
        metadata: PathBuf,

        /// Output path for the processed table
        #[arg(long, default_value = "ml/data/processed_data.csv")]
        out: PathBuf,
    },

    /// Fit the nearest-neighbor model over the processed table
    Train {
        /// The processed table written by `rec prepare`
        #[arg(long, default_value = "ml/data/processed_data.csv")]
        data: PathBuf,

        /// Proportion of rows held out for testing
        #[arg(long, default_value_t = 0.2)]
        test_size: f32,

        /// Seed for the split shuffle
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Neighbor count for the fitted structure
        #[arg(long, default_value_t = 5)]
        n_neighbors: usize,
    },

    /// Query the 6 nearest neighbors for a user's history
    Predict {
        /// User to recommend for
        #[arg(long)]
        user_id: u32,

        /// Model descriptor file
        #[arg(long, default_value = "ml/models/recommendationModel.json")]
        model: PathBuf,

        /// User interaction table
        #[arg(long, default_value = "ml/data/user_data.csv")]
        data: PathBuf,
    },

    /// Score exact-match accuracy on the held-out table
    Evaluate {
        /// Model descriptor file
        #[arg(long, default_value = "ml/models/recommendationModel.json")]
        model: PathBuf,

        /// Held-out table
        #[arg(long, default_value = "ml/data/test_data.csv")]
        data: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Prepare {
            interactions,
            metadata,
            out,
        } => prepare::run(&interactions, &metadata, &out),

        Commands::Train {
            data,
            test_size,
            seed,
            n_neighbors,
        } => train::run(&data, test_size, seed, n_neighbors),

        Commands::Predict {
            user_id,
            model,
            data,
        } => predict::run(user_id, &model, &data),

        Commands::Evaluate { model, data } => evaluate::run(&model, &data),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

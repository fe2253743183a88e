//! Data preparation: raw interaction and film-metadata feeds to one flat
//! processed table.
//!
//! Steps, in order: fill missing values with 0, attach the per-user
//! interaction count, left-join film metadata by item identifier, write
//! the result as CSV. There is no schema validation and no duplicate
//! handling; a missing input file fails the run.

use std::path::PathBuf;

use crate::error::Result;
use crate::frame::Frame;

use super::{COUNT_COLUMN, FILM_COLUMN, USER_COLUMN};

/// Input and output paths for the prepare stage.
#[derive(Debug, Clone)]
pub struct PrepareConfig {
    /// Record-oriented JSON interaction feed.
    pub interactions: PathBuf,
    /// Record-oriented JSON film metadata.
    pub film_metadata: PathBuf,
    /// Destination for the flat processed table (overwritten per run).
    pub output: PathBuf,
}

/// Summary of a completed prepare run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareReport {
    /// Rows in the processed table.
    pub n_rows: usize,
    /// Columns in the processed table.
    pub n_cols: usize,
}

/// Runs the prepare stage.
///
/// # Errors
///
/// Returns `Io`/`Serialization` for unreadable or malformed inputs,
/// `MissingColumn` if the interaction feed lacks `userId` or `filmId`.
pub fn run(config: &PrepareConfig) -> Result<PrepareReport> {
    let mut interactions = Frame::from_json_records(&config.interactions)?;
    let metadata = Frame::from_json_records(&config.film_metadata)?;

    interactions.fill_null(0.0);
    interactions.attach_group_count(USER_COLUMN, COUNT_COLUMN)?;

    // Interactions without a metadata row keep null metadata cells; the
    // fill step above ran before the join, so they stay null in the CSV.
    let processed = interactions.left_join(&metadata, FILM_COLUMN)?;
    processed.to_csv(&config.output)?;

    let (n_rows, n_cols) = processed.shape();
    Ok(PrepareReport { n_rows, n_cols })
}

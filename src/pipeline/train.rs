//! Training: fit a nearest-neighbor structure over the processed table.
//!
//! Features are the three item columns (including the raw item
//! identifier), labels are user identifiers, and 20% of rows are held out
//! with a fixed seed. The fitted structure is dropped when the stage
//! returns: the descriptor file on disk carries constructor parameters
//! only, never fitted state, so downstream stages rebuild unfitted models.

use std::path::PathBuf;

use crate::error::Result;
use crate::frame::Frame;
use crate::model_selection::train_test_split;
use crate::neighbors::{DistanceMetric, NearestNeighbors};

use super::{FEATURE_COLUMNS, USER_COLUMN};

/// Configuration for the train stage.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// The processed table written by the prepare stage.
    pub processed_data: PathBuf,
    /// Proportion of rows held out for testing.
    pub test_size: f32,
    /// Seed for the split shuffle.
    pub random_state: u64,
    /// Neighbor count for the fitted structure.
    pub n_neighbors: usize,
}

impl TrainConfig {
    /// Creates a config with the observed defaults: 20% holdout, seed 42,
    /// five neighbors.
    #[must_use]
    pub fn new(processed_data: PathBuf) -> Self {
        Self {
            processed_data,
            test_size: 0.2,
            random_state: 42,
            n_neighbors: 5,
        }
    }
}

/// Summary of a completed train run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainReport {
    /// Training partition size.
    pub n_train: usize,
    /// Held-out partition size.
    pub n_test: usize,
    /// Feature count.
    pub n_features: usize,
}

/// Runs the train stage.
///
/// # Errors
///
/// Returns `Io`/`Csv` for unreadable input, `MissingColumn` if the
/// processed table lacks a feature or label column, or a split/fit error.
pub fn run(config: &TrainConfig) -> Result<TrainReport> {
    let data = Frame::from_csv(&config.processed_data)?;

    let x = data.to_feature_matrix(&FEATURE_COLUMNS)?;
    let y = data.column_ids(USER_COLUMN)?;

    let (x_train, x_test, _y_train, _y_test) =
        train_test_split(&x, &y, config.test_size, Some(config.random_state))?;

    let mut model =
        NearestNeighbors::new(config.n_neighbors).with_metric(DistanceMetric::Cosine);
    model.fit(&x_train)?;

    // The fitted structure goes out of scope here. Persisting it is the
    // step the source never implemented.
    Ok(TrainReport {
        n_train: x_train.shape().0,
        n_test: x_test.shape().0,
        n_features: x_train.shape().1,
    })
}

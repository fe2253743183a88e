//! Prediction: nearest-neighbor recommendations for one user.
//!
//! The stage rebuilds a model from the descriptor file, filters the user
//! table to the requested user's history, and queries for the six nearest
//! neighbors of each history row. Because the descriptor holds constructor
//! parameters only, the rebuilt model has no training data and the query
//! fails with `NotFitted`; that failure is the faithful observed behavior,
//! surfaced as a typed error rather than patched.

use std::path::PathBuf;

use crate::descriptor::ModelDescriptor;
use crate::error::Result;
use crate::frame::Frame;
use crate::neighbors::NeighborQuery;

use super::{FEATURE_COLUMNS, RECOMMENDATION_COUNT, USER_COLUMN};

/// Input paths for the predict stage.
#[derive(Debug, Clone)]
pub struct PredictConfig {
    /// The model descriptor file.
    pub model: PathBuf,
    /// The user interaction table.
    pub user_data: PathBuf,
}

/// Neighbor query results for one user's history.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    /// The user the query was made for.
    pub user_id: u32,
    /// Rows of the user's history that were queried.
    pub n_history_rows: usize,
    /// Per-history-row neighbor distances and indices.
    pub neighbors: NeighborQuery,
}

/// Runs the predict stage for one user.
///
/// The descriptor's kind tag is checked before any data file is touched:
/// an unsupported tag fails here with no further I/O.
///
/// # Errors
///
/// Returns `UnsupportedModelType` for an unknown descriptor tag,
/// `Io`/`Csv` for unreadable data, `MissingColumn` for absent feature
/// columns, and `NotFitted` when the rebuilt model is queried.
pub fn run(config: &PredictConfig, user_id: u32) -> Result<Recommendations> {
    let descriptor = ModelDescriptor::load(&config.model)?;
    let model = descriptor.build_model()?;

    let data = Frame::from_csv(&config.user_data)?;
    let history = data.filter_key_eq(USER_COLUMN, &user_id.to_string())?;
    let features = history.to_feature_matrix(&FEATURE_COLUMNS)?;

    let neighbors = model.kneighbors(&features, RECOMMENDATION_COUNT)?;

    Ok(Recommendations {
        user_id,
        n_history_rows: history.n_rows(),
        neighbors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::NeighborParams;
    use crate::error::RecomendarError;

    fn write_user_data(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("user_data.csv");
        std::fs::write(
            &path,
            "userId,filmId,genre,director\n\
             123,10,drama,kurosawa\n\
             123,11,comedy,tati\n\
             456,12,drama,varda\n",
        )
        .expect("write user data");
        path
    }

    fn write_descriptor(dir: &std::path::Path, model_type: &str) -> PathBuf {
        let path = dir.join("recommendationModel.json");
        let descriptor = ModelDescriptor {
            model_type: model_type.to_string(),
            parameters: NeighborParams::default(),
        };
        descriptor.save(&path).expect("write descriptor");
        path
    }

    #[test]
    fn test_predict_surfaces_not_fitted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = PredictConfig {
            model: write_descriptor(dir.path(), "NearestNeighbors"),
            user_data: write_user_data(dir.path()),
        };

        // The descriptor has no fitted state, so the query must fail.
        let err = run(&config, 123);
        assert!(matches!(err, Err(RecomendarError::NotFitted { .. })));
    }

    #[test]
    fn test_predict_rejects_unsupported_type_before_data_io() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = PredictConfig {
            model: write_descriptor(dir.path(), "DecisionTree"),
            // Deliberately missing: the tag check must fire first.
            user_data: dir.path().join("absent.csv"),
        };

        let err = run(&config, 123);
        assert!(matches!(
            err,
            Err(RecomendarError::UnsupportedModelType { found }) if found == "DecisionTree"
        ));
    }

    #[test]
    fn test_predict_missing_descriptor_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = PredictConfig {
            model: dir.path().join("absent.json"),
            user_data: write_user_data(dir.path()),
        };
        assert!(matches!(
            run(&config, 123),
            Err(RecomendarError::Io(_))
        ));
    }
}

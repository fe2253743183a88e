//! Evaluation: exact-match accuracy of predicted labels on a held-out
//! table.
//!
//! Symmetric to the predict stage: the model is rebuilt from the same
//! parameter-only descriptor, so prediction fails with `NotFitted` in a
//! faithful run. The metric itself compares predicted labels against raw
//! user identifiers, which is the observed (and questionable) source
//! behavior; see DESIGN.md.

use std::path::PathBuf;

use crate::descriptor::ModelDescriptor;
use crate::error::Result;
use crate::frame::Frame;
use crate::metrics::accuracy;

use super::{FEATURE_COLUMNS, USER_COLUMN};

/// Input paths for the evaluate stage.
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    /// The model descriptor file.
    pub model: PathBuf,
    /// The held-out table with `userId` and the feature columns.
    pub test_data: PathBuf,
}

/// Runs the evaluate stage, returning exact-match accuracy.
///
/// # Errors
///
/// Returns `UnsupportedModelType` for an unknown descriptor tag (checked
/// before any data I/O), `Io`/`Csv`/`MissingColumn` for bad input, and
/// `NotFitted` when the rebuilt model is asked to predict.
pub fn run(config: &EvaluateConfig) -> Result<f32> {
    let descriptor = ModelDescriptor::load(&config.model)?;
    let model = descriptor.build_model()?;

    let test_data = Frame::from_csv(&config.test_data)?;
    let features = test_data.to_feature_matrix(&FEATURE_COLUMNS)?;
    let truth = test_data.column_ids(USER_COLUMN)?;

    let predictions = model.predict(&features)?;
    Ok(accuracy(&predictions, &truth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::NeighborParams;
    use crate::error::RecomendarError;

    fn write_test_data(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("test_data.csv");
        std::fs::write(
            &path,
            "userId,filmId,genre,director\n\
             1,10,drama,kurosawa\n\
             2,11,comedy,tati\n",
        )
        .expect("write test data");
        path
    }

    #[test]
    fn test_evaluate_surfaces_not_fitted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let model = dir.path().join("recommendationModel.json");
        ModelDescriptor::nearest_neighbors(NeighborParams::default())
            .save(&model)
            .expect("write descriptor");

        let config = EvaluateConfig {
            model,
            test_data: write_test_data(dir.path()),
        };

        let err = run(&config);
        assert!(matches!(err, Err(RecomendarError::NotFitted { .. })));
    }

    #[test]
    fn test_evaluate_rejects_unsupported_type_before_data_io() {
        let dir = tempfile::tempdir().expect("tempdir");
        let model = dir.path().join("recommendationModel.json");
        ModelDescriptor {
            model_type: "GradientBoosting".to_string(),
            parameters: NeighborParams::default(),
        }
        .save(&model)
        .expect("write descriptor");

        let config = EvaluateConfig {
            model,
            // Deliberately missing: the tag check must fire first.
            test_data: dir.path().join("absent.csv"),
        };

        assert!(matches!(
            run(&config),
            Err(RecomendarError::UnsupportedModelType { .. })
        ));
    }

    #[test]
    fn test_evaluate_missing_test_data_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let model = dir.path().join("recommendationModel.json");
        ModelDescriptor::nearest_neighbors(NeighborParams::default())
            .save(&model)
            .expect("write descriptor");

        let config = EvaluateConfig {
            model,
            test_data: dir.path().join("absent.csv"),
        };
        assert!(matches!(run(&config), Err(RecomendarError::Csv(_))));
    }
}

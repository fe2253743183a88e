//! The model descriptor file (`ml/models/recommendationModel.json`).
//!
//! The descriptor records a model kind and its constructor parameters. It
//! is configuration, not learned state: no training vectors or labels are
//! serialized, so a model rebuilt from a descriptor is always unfitted.
//! The parameter record is closed (unknown keys are rejected) and the
//! model-kind dispatch is a tagged match, currently over a single kind.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecomendarError, Result};
use crate::neighbors::{DistanceMetric, NearestNeighbors};

/// The one descriptor tag this crate recognizes.
pub const NEAREST_NEIGHBORS_TAG: &str = "NearestNeighbors";

/// Constructor parameters for the `NearestNeighbors` model kind.
///
/// Every recognized option is enumerated here; a descriptor carrying any
/// other key fails to parse rather than being silently forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct NeighborParams {
    /// Default neighbor count for queries.
    pub n_neighbors: usize,
    /// Distance metric name.
    pub metric: MetricName,
}

impl Default for NeighborParams {
    fn default() -> Self {
        Self {
            n_neighbors: 5,
            metric: MetricName::Cosine,
        }
    }
}

/// Serializable metric names, matching the source descriptor's strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricName {
    /// Cosine distance.
    Cosine,
    /// Euclidean distance.
    Euclidean,
    /// Manhattan distance.
    Manhattan,
}

impl From<MetricName> for DistanceMetric {
    fn from(name: MetricName) -> Self {
        match name {
            MetricName::Cosine => DistanceMetric::Cosine,
            MetricName::Euclidean => DistanceMetric::Euclidean,
            MetricName::Manhattan => DistanceMetric::Manhattan,
        }
    }
}

/// A parsed model descriptor file.
///
/// # Examples
///
/// ```
/// use recomendar::descriptor::ModelDescriptor;
///
/// let json = r#"{"model_type": "NearestNeighbors",
///                "parameters": {"n_neighbors": 5, "metric": "cosine"}}"#;
/// let descriptor = ModelDescriptor::from_json(json).expect("valid descriptor");
/// let model = descriptor.build_model().expect("supported model type");
/// assert!(!model.is_fitted());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model kind tag.
    pub model_type: String,
    /// Constructor parameters for the tagged kind.
    #[serde(default)]
    pub parameters: NeighborParams,
}

impl ModelDescriptor {
    /// Creates a descriptor for the `NearestNeighbors` kind.
    #[must_use]
    pub fn nearest_neighbors(parameters: NeighborParams) -> Self {
        Self {
            model_type: NEAREST_NEIGHBORS_TAG.to_string(),
            parameters,
        }
    }

    /// Parses a descriptor from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed JSON or unrecognized
    /// parameter keys.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the descriptor to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` on encoding failure.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a descriptor from a file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file can't be read, `Serialization` if it
    /// doesn't parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Saves the descriptor to a file.
    ///
    /// # Errors
    ///
    /// Returns `Io` on write failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Builds an unfitted model from the descriptor.
    ///
    /// Dispatch is a match on the kind tag; anything other than
    /// `NearestNeighbors` is `UnsupportedModelType` and no model is
    /// constructed. The returned structure carries constructor parameters
    /// only; it has ingested no training data.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedModelType` for an unknown tag.
    pub fn build_model(&self) -> Result<NearestNeighbors> {
        match self.model_type.as_str() {
            NEAREST_NEIGHBORS_TAG => Ok(NearestNeighbors::new(self.parameters.n_neighbors)
                .with_metric(self.parameters.metric.into())),
            other => Err(RecomendarError::UnsupportedModelType {
                found: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor() {
        let json = r#"{"model_type": "NearestNeighbors",
                       "parameters": {"n_neighbors": 6, "metric": "euclidean"}}"#;
        let d = ModelDescriptor::from_json(json).expect("valid descriptor");
        assert_eq!(d.model_type, NEAREST_NEIGHBORS_TAG);
        assert_eq!(d.parameters.n_neighbors, 6);
        assert_eq!(d.parameters.metric, MetricName::Euclidean);
    }

    #[test]
    fn test_parameters_default_when_absent() {
        let json = r#"{"model_type": "NearestNeighbors"}"#;
        let d = ModelDescriptor::from_json(json).expect("valid descriptor");
        assert_eq!(d.parameters, NeighborParams::default());
    }

    #[test]
    fn test_unknown_parameter_key_rejected() {
        let json = r#"{"model_type": "NearestNeighbors",
                       "parameters": {"n_neighbors": 5, "leaf_size": 30}}"#;
        let err = ModelDescriptor::from_json(json);
        assert!(matches!(err, Err(RecomendarError::Serialization(_))));
    }

    #[test]
    fn test_build_model_is_unfitted() {
        let d = ModelDescriptor::nearest_neighbors(NeighborParams::default());
        let model = d.build_model().expect("supported tag");
        assert!(!model.is_fitted());
        assert_eq!(model.n_neighbors(), 5);
    }

    #[test]
    fn test_unsupported_model_type() {
        let d = ModelDescriptor {
            model_type: "KMeans".to_string(),
            parameters: NeighborParams::default(),
        };
        let err = d.build_model();
        assert!(matches!(
            err,
            Err(RecomendarError::UnsupportedModelType { found }) if found == "KMeans"
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let d = ModelDescriptor::nearest_neighbors(NeighborParams {
            n_neighbors: 6,
            metric: MetricName::Manhattan,
        });
        let parsed =
            ModelDescriptor::from_json(&d.to_json().expect("encodes")).expect("decodes");
        assert_eq!(parsed, d);
    }

    #[test]
    fn test_load_save_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("recommendationModel.json");

        let d = ModelDescriptor::nearest_neighbors(NeighborParams::default());
        d.save(&path).expect("save");
        let loaded = ModelDescriptor::load(&path).expect("load");
        assert_eq!(loaded, d);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ModelDescriptor::load("/nonexistent/recommendationModel.json");
        assert!(matches!(err, Err(RecomendarError::Io(_))));
    }
}

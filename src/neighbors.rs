//! Nearest-neighbor search over item feature vectors.
//!
//! `NearestNeighbors` is a lazy learner: `fit` stores the training matrix
//! (and labels, when given) and all work happens at query time. Queries
//! against an unfitted structure fail with [`RecomendarError::NotFitted`],
//! which is the pipeline's dominant real failure mode: the descriptor file
//! carries constructor parameters only, so models rebuilt from it have no
//! training data.

use crate::error::{RecomendarError, Result};
use crate::primitives::{Matrix, Vector};

/// Distance metric for neighbor queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Cosine distance: 1 - (x·y) / (|x||y|)
    Cosine,
    /// Euclidean distance: sqrt(sum((x_i - y_i)^2))
    Euclidean,
    /// Manhattan distance: sum(|x_i - y_i|)
    Manhattan,
}

/// Neighbor distances and indices for a batch of query rows.
///
/// `distances[i]` and `indices[i]` describe the i-th query row's neighbors,
/// nearest first.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborQuery {
    /// Per-query-row neighbor distances, ascending.
    pub distances: Vec<Vector>,
    /// Per-query-row indices into the training matrix.
    pub indices: Vec<Vec<usize>>,
}

/// K-nearest-neighbor search structure.
///
/// # Example
///
/// ```
/// use recomendar::neighbors::{DistanceMetric, NearestNeighbors};
/// use recomendar::primitives::Matrix;
///
/// let x = Matrix::from_vec(3, 2, vec![
///     1.0, 0.0,
///     0.0, 1.0,
///     1.0, 1.0,
/// ]).expect("3x2 matrix");
///
/// let mut model = NearestNeighbors::new(2).with_metric(DistanceMetric::Cosine);
/// model.fit(&x).expect("valid training data");
///
/// let query = Matrix::from_vec(1, 2, vec![1.0, 0.1]).expect("1x2 query");
/// let result = model.kneighbors(&query, 2).expect("fitted model");
/// assert_eq!(result.indices[0][0], 0);
/// ```
#[derive(Debug, Clone)]
pub struct NearestNeighbors {
    /// Default neighbor count for queries.
    n_neighbors: usize,
    /// Distance metric.
    metric: DistanceMetric,
    /// Training feature matrix (stored during fit).
    x_train: Option<Matrix>,
    /// Training labels (stored during fit_with_labels).
    y_train: Option<Vec<u32>>,
}

impl NearestNeighbors {
    /// Creates an unfitted structure with the given default neighbor count.
    #[must_use]
    pub fn new(n_neighbors: usize) -> Self {
        Self {
            n_neighbors,
            metric: DistanceMetric::Cosine,
            x_train: None,
            y_train: None,
        }
    }

    /// Sets the distance metric.
    #[must_use]
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Returns the configured default neighbor count.
    #[must_use]
    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    /// Returns true once training data has been ingested.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.x_train.is_some()
    }

    /// Fits the structure by storing the training matrix.
    ///
    /// # Errors
    ///
    /// Returns an error on empty data or when `n_neighbors` exceeds the
    /// number of training samples.
    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        let (n_samples, _) = x.shape();

        if n_samples == 0 {
            return Err("Cannot fit with zero samples".into());
        }
        if self.n_neighbors > n_samples {
            return Err(RecomendarError::InvalidHyperparameter {
                param: "n_neighbors".to_string(),
                value: self.n_neighbors.to_string(),
                constraint: format!("<= {n_samples} training samples"),
            });
        }

        self.x_train = Some(x.clone());
        self.y_train = None;
        Ok(())
    }

    /// Fits the structure with labels, enabling [`Self::predict`].
    ///
    /// # Errors
    ///
    /// Returns an error if `y` length doesn't match the sample count, or
    /// on the same conditions as [`Self::fit`].
    pub fn fit_with_labels(&mut self, x: &Matrix, y: &[u32]) -> Result<()> {
        if y.len() != x.shape().0 {
            return Err("Number of samples in X and y must match".into());
        }
        self.fit(x)?;
        self.y_train = Some(y.to_vec());
        Ok(())
    }

    /// Finds the `k` nearest training rows for each query row.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if no training data was ingested, an error if
    /// feature dimensions mismatch or `k` exceeds the training size.
    pub fn kneighbors(&self, x: &Matrix, k: usize) -> Result<NeighborQuery> {
        let x_train = self
            .x_train
            .as_ref()
            .ok_or_else(|| RecomendarError::not_fitted("kneighbors"))?;

        let (n_queries, n_features) = x.shape();
        let (n_train, n_train_features) = x_train.shape();

        if n_features != n_train_features {
            return Err(RecomendarError::DimensionMismatch {
                expected: format!("{n_train_features} features"),
                actual: format!("{n_features}"),
            });
        }
        if k == 0 || k > n_train {
            return Err(RecomendarError::InvalidHyperparameter {
                param: "k".to_string(),
                value: k.to_string(),
                constraint: format!("1..={n_train}"),
            });
        }

        let mut distances = Vec::with_capacity(n_queries);
        let mut indices = Vec::with_capacity(n_queries);

        for i in 0..n_queries {
            let mut ranked: Vec<(f32, usize)> = (0..n_train)
                .map(|j| (self.metric.distance(x.row(i), x_train.row(j)), j))
                .collect();
            ranked.sort_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .expect("distance values are valid f32 (not NaN)")
            });
            ranked.truncate(k);

            distances.push(Vector::from_vec(ranked.iter().map(|&(d, _)| d).collect()));
            indices.push(ranked.iter().map(|&(_, j)| j).collect());
        }

        Ok(NeighborQuery { distances, indices })
    }

    /// Predicts a label for each query row from the nearest stored label.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if the structure was never fitted or was fitted
    /// without labels.
    pub fn predict(&self, x: &Matrix) -> Result<Vec<u32>> {
        let y_train = self
            .y_train
            .as_ref()
            .ok_or_else(|| RecomendarError::not_fitted("predict"))?;

        let nearest = self.kneighbors(x, 1)?;
        Ok(nearest
            .indices
            .iter()
            .map(|row| y_train[row[0]])
            .collect())
    }
}

impl DistanceMetric {
    fn distance(self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            DistanceMetric::Cosine => {
                let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
                let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
                let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
                if norm_a == 0.0 || norm_b == 0.0 {
                    // A zero vector has no direction; treat it as maximally
                    // distant from everything.
                    1.0
                } else {
                    1.0 - dot / (norm_a * norm_b)
                }
            }
            DistanceMetric::Euclidean => a
                .iter()
                .zip(b)
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f32>()
                .sqrt(),
            DistanceMetric::Manhattan => a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_matrix() -> Matrix {
        Matrix::from_vec(
            4,
            2,
            vec![
                1.0, 0.0, // item 0
                0.0, 1.0, // item 1
                1.0, 1.0, // item 2
                2.0, 0.0, // item 3: same direction as item 0
            ],
        )
        .expect("4x2 matrix")
    }

    #[test]
    fn test_kneighbors_unfitted_is_not_fitted_error() {
        let model = NearestNeighbors::new(5);
        let query = Matrix::from_vec(1, 2, vec![1.0, 0.0]).expect("query");
        let err = model.kneighbors(&query, 2);
        assert!(matches!(err, Err(RecomendarError::NotFitted { .. })));
    }

    #[test]
    fn test_predict_unfitted_is_not_fitted_error() {
        let model = NearestNeighbors::new(5);
        let query = Matrix::from_vec(1, 2, vec![1.0, 0.0]).expect("query");
        assert!(matches!(
            model.predict(&query),
            Err(RecomendarError::NotFitted { .. })
        ));
    }

    #[test]
    fn test_predict_without_labels_is_not_fitted_error() {
        let mut model = NearestNeighbors::new(2);
        model.fit(&training_matrix()).expect("fit");
        let query = Matrix::from_vec(1, 2, vec![1.0, 0.0]).expect("query");
        assert!(matches!(
            model.predict(&query),
            Err(RecomendarError::NotFitted { .. })
        ));
    }

    #[test]
    fn test_cosine_ignores_magnitude() {
        let mut model = NearestNeighbors::new(2);
        model.fit(&training_matrix()).expect("fit");

        // (3, 0) points the same way as items 0 and 3.
        let query = Matrix::from_vec(1, 2, vec![3.0, 0.0]).expect("query");
        let result = model.kneighbors(&query, 2).expect("query succeeds");
        let mut found = result.indices[0].clone();
        found.sort_unstable();
        assert_eq!(found, vec![0, 3]);
        assert!(result.distances[0][0].abs() < 1e-6);
    }

    #[test]
    fn test_euclidean_nearest() {
        let mut model =
            NearestNeighbors::new(1).with_metric(DistanceMetric::Euclidean);
        model.fit(&training_matrix()).expect("fit");

        let query = Matrix::from_vec(1, 2, vec![0.9, 0.9]).expect("query");
        let result = model.kneighbors(&query, 1).expect("query succeeds");
        assert_eq!(result.indices[0], vec![2]);
    }

    #[test]
    fn test_distances_sorted_ascending() {
        let mut model = NearestNeighbors::new(4);
        model.fit(&training_matrix()).expect("fit");

        let query = Matrix::from_vec(1, 2, vec![1.0, 0.2]).expect("query");
        let result = model.kneighbors(&query, 4).expect("query succeeds");
        let d = result.distances[0].as_slice();
        assert!(d.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_k_larger_than_training_rejected() {
        let mut model = NearestNeighbors::new(2);
        model.fit(&training_matrix()).expect("fit");
        let query = Matrix::from_vec(1, 2, vec![1.0, 0.0]).expect("query");
        assert!(matches!(
            model.kneighbors(&query, 9),
            Err(RecomendarError::InvalidHyperparameter { .. })
        ));
    }

    #[test]
    fn test_feature_dimension_mismatch() {
        let mut model = NearestNeighbors::new(2);
        model.fit(&training_matrix()).expect("fit");
        let query = Matrix::from_vec(1, 3, vec![1.0, 0.0, 0.0]).expect("query");
        assert!(matches!(
            model.kneighbors(&query, 2),
            Err(RecomendarError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_predict_with_labels() {
        let mut model = NearestNeighbors::new(1);
        model
            .fit_with_labels(&training_matrix(), &[7, 8, 9, 7])
            .expect("fit");

        let query = Matrix::from_vec(2, 2, vec![0.0, 0.9, 1.1, 1.0]).expect("queries");
        let labels = model
            .predict(&query)
            .expect("fitted with labels should predict");
        assert_eq!(labels, vec![8, 9]);
    }

    #[test]
    fn test_fit_rejects_mismatched_labels() {
        let mut model = NearestNeighbors::new(1);
        assert!(model
            .fit_with_labels(&training_matrix(), &[1, 2])
            .is_err());
    }
}

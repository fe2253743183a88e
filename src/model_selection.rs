//! Train/test splitting for the training stage.
//!
//! A single seeded split: shuffle row indices, hold out `round(test_size
//! * n)` rows, keep the rest for training. With a fixed `random_state` the
//! partition is reproducible across runs.

use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;

/// Validates inputs for `train_test_split`.
fn validate_split_inputs(x: &Matrix, y: &[u32], test_size: f32) -> Result<(usize, usize)> {
    if test_size <= 0.0 || test_size >= 1.0 {
        return Err(RecomendarError::InvalidHyperparameter {
            param: "test_size".to_string(),
            value: test_size.to_string(),
            constraint: "0 < test_size < 1".to_string(),
        });
    }

    let (n_samples, _) = x.shape();
    if n_samples != y.len() {
        return Err(RecomendarError::DimensionMismatch {
            expected: format!("{n_samples} labels"),
            actual: format!("{}", y.len()),
        });
    }

    let n_test = (n_samples as f32 * test_size).round() as usize;
    let n_train = n_samples - n_test;

    if n_test == 0 || n_train == 0 {
        return Err(RecomendarError::Other(format!(
            "split would produce an empty partition (n_train={n_train}, n_test={n_test})"
        )));
    }

    Ok((n_train, n_test))
}

/// Shuffles row indices with an optional random seed.
fn shuffle_indices(n_samples: usize, random_state: Option<u64>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n_samples).collect();

    if let Some(seed) = random_state {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
    } else {
        let mut rng = rand::thread_rng();
        indices.shuffle(&mut rng);
    }

    indices
}

/// Extracts the rows named by `indices` into a new matrix/label pair.
fn extract_samples(x: &Matrix, y: &[u32], indices: &[usize]) -> (Matrix, Vec<u32>) {
    let n_features = x.shape().1;
    let mut x_data = Vec::with_capacity(indices.len() * n_features);
    let mut y_data = Vec::with_capacity(indices.len());

    for &idx in indices {
        x_data.extend_from_slice(x.row(idx));
        y_data.push(y[idx]);
    }

    let x_subset = Matrix::from_vec(indices.len(), n_features, x_data)
        .expect("index extraction preserves row width");

    (x_subset, y_data)
}

/// Splits features and labels into train and test partitions.
///
/// # Arguments
///
/// * `x` - Feature matrix
/// * `y` - Label slice (user identifiers)
/// * `test_size` - Proportion held out for testing (0.0 to 1.0, exclusive)
/// * `random_state` - Optional seed for reproducible shuffling
///
/// # Returns
///
/// Tuple of (`x_train`, `x_test`, `y_train`, `y_test`).
///
/// # Errors
///
/// Returns an error for an out-of-range `test_size`, mismatched lengths,
/// or a split that would leave either partition empty.
///
/// # Example
///
/// ```
/// use recomendar::model_selection::train_test_split;
/// use recomendar::primitives::Matrix;
///
/// let x = Matrix::from_vec(10, 2, (0..20).map(|i| i as f32).collect()).expect("10x2 matrix");
/// let y: Vec<u32> = (0..10).collect();
///
/// let (x_train, x_test, y_train, y_test) =
///     train_test_split(&x, &y, 0.2, Some(42)).expect("valid split");
/// assert_eq!(x_train.shape().0, 8);
/// assert_eq!(x_test.shape().0, 2);
/// assert_eq!(y_train.len(), 8);
/// assert_eq!(y_test.len(), 2);
/// ```
#[allow(clippy::type_complexity)]
pub fn train_test_split(
    x: &Matrix,
    y: &[u32],
    test_size: f32,
    random_state: Option<u64>,
) -> Result<(Matrix, Matrix, Vec<u32>, Vec<u32>)> {
    let (n_train, _) = validate_split_inputs(x, y, test_size)?;
    let n_samples = x.shape().0;

    let indices = shuffle_indices(n_samples, random_state);
    let train_indices = &indices[..n_train];
    let test_indices = &indices[n_train..];

    let (x_train, y_train) = extract_samples(x, y, train_indices);
    let (x_test, y_test) = extract_samples(x, y, test_indices);

    Ok((x_train, x_test, y_train, y_test))
}

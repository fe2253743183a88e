//! Evaluation metrics.

/// Compute exact-match classification accuracy.
///
/// accuracy = correct predictions / total predictions
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use recomendar::metrics::accuracy;
///
/// let y_true = vec![1, 2, 3, 1];
/// let y_pred = vec![1, 2, 1, 1];
/// assert!((accuracy(&y_pred, &y_true) - 0.75).abs() < 1e-6);
/// ```
#[must_use]
pub fn accuracy(y_pred: &[u32], y_true: &[u32]) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    correct as f32 / y_true.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_all_correct() {
        assert_eq!(accuracy(&[1, 2, 3], &[1, 2, 3]), 1.0);
    }

    #[test]
    fn test_accuracy_none_correct() {
        assert_eq!(accuracy(&[4, 5, 6], &[1, 2, 3]), 0.0);
    }

    #[test]
    fn test_accuracy_partial() {
        let acc = accuracy(&[1, 2, 9], &[1, 2, 3]);
        assert!((acc - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_accuracy_length_mismatch_panics() {
        let _ = accuracy(&[1], &[1, 2]);
    }
}

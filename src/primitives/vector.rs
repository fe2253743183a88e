//! Vector type for 1D numeric data.

use serde::{Deserialize, Serialize};

/// A 1D vector of floating-point values.
///
/// # Examples
///
/// ```
/// use recomendar::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[1], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    /// Creates a vector from a slice.
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates a vector from an owned Vec.
    #[must_use]
    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = f32;

    fn index(&self, idx: usize) -> &f32 {
        &self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let v = Vector::from_slice(&[1.0, 2.0]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_empty() {
        let v = Vector::from_vec(vec![]);
        assert!(v.is_empty());
    }
}

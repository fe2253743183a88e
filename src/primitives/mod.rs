//! Core numeric primitives (Vector, Matrix).
//!
//! These types back the feature matrices and neighbor queries; they are
//! deliberately small and row-major.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

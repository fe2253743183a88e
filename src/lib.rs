//! Recomendar: a film recommendation data pipeline in pure Rust.
//!
//! Four file-coupled stages turn raw interaction feeds into neighbor-based
//! recommendations: prepare, train, predict, and evaluate. Stages are
//! invoked independently (see the `rec` CLI) and communicate only through
//! files; there is no shared in-process state.
//!
//! A deliberate, documented limitation is preserved from the system this
//! reproduces: the model descriptor file stores constructor parameters
//! only, never fitted state. Models rebuilt from it are unfitted, so the
//! predict and evaluate stages fail with a typed `NotFitted` error. The
//! integration tests assert that outcome as the correct behavior.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::neighbors::NearestNeighbors;
//! use recomendar::primitives::Matrix;
//!
//! let x = Matrix::from_vec(3, 2, vec![
//!     1.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 1.0,
//! ]).unwrap();
//!
//! let mut model = NearestNeighbors::new(2);
//! model.fit(&x).unwrap();
//!
//! let query = Matrix::from_vec(1, 2, vec![0.9, 0.1]).unwrap();
//! let result = model.kneighbors(&query, 2).unwrap();
//! assert_eq!(result.indices[0][0], 0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`frame`]: Nullable column-oriented tables with JSON/CSV I/O
//! - [`neighbors`]: K-nearest-neighbor search and label prediction
//! - [`model_selection`]: Seeded train/test splitting
//! - [`metrics`]: Evaluation metrics
//! - [`descriptor`]: The model descriptor file format and dispatch
//! - [`pipeline`]: The four pipeline stages

pub mod descriptor;
pub mod error;
pub mod frame;
pub mod metrics;
pub mod model_selection;
pub mod neighbors;
pub mod pipeline;
pub mod prelude;
pub mod primitives;

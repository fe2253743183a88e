//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::descriptor::{ModelDescriptor, NeighborParams};
pub use crate::error::{RecomendarError, Result};
pub use crate::frame::{Frame, Value};
pub use crate::metrics::accuracy;
pub use crate::model_selection::train_test_split;
pub use crate::neighbors::{DistanceMetric, NearestNeighbors, NeighborQuery};
pub use crate::primitives::{Matrix, Vector};

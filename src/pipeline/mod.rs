//! The four file-coupled pipeline stages.
//!
//! Each stage is a single linear pass invoked independently; stages share
//! nothing in memory and communicate only through the files named in their
//! configs. There is no coordination between concurrent runs and every
//! error is fatal to the invoking stage.
//!
//! - [`prepare`]: raw JSON feeds -> flat processed CSV
//! - [`train`]: processed CSV -> fitted (and discarded) neighbor model
//! - [`predict`]: descriptor + user history -> nearest-neighbor query
//! - [`evaluate`]: descriptor + held-out CSV -> exact-match accuracy

pub mod evaluate;
pub mod predict;
pub mod prepare;
pub mod train;

/// Column holding the user identifier in every table.
pub const USER_COLUMN: &str = "userId";

/// Column holding the item identifier.
pub const FILM_COLUMN: &str = "filmId";

/// Per-user interaction count column added by the prepare stage.
pub const COUNT_COLUMN: &str = "userId_count";

/// Feature columns for item similarity. The raw item identifier is kept
/// in the feature set, matching the observed training behavior.
pub const FEATURE_COLUMNS: [&str; 3] = [FILM_COLUMN, "genre", "director"];

/// Neighbor count requested by the predict stage.
pub const RECOMMENDATION_COUNT: usize = 6;

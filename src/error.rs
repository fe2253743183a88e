//! Error types for recomendar operations.
//!
//! Every pipeline stage is fatal-on-error: there are no retries and no
//! partial results, so errors carry enough context for the final report.

use std::fmt;

/// Main error type for recomendar operations.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::MissingColumn {
///     column: "genre".to_string(),
///     table: "processed_data.csv".to_string(),
/// };
/// assert!(err.to_string().contains("genre"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A required column is absent from a loaded table.
    MissingColumn {
        /// Column name
        column: String,
        /// Table it was expected in
        table: String,
    },

    /// The model descriptor names a model kind this crate does not support.
    UnsupportedModelType {
        /// The tag found in the descriptor
        found: String,
    },

    /// Query or prediction attempted on a structure that was never fitted.
    NotFitted {
        /// The operation that was attempted
        operation: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// CSV parse or write error.
    Csv(String),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            RecomendarError::MissingColumn { column, table } => {
                write!(f, "Missing column '{column}' in {table}")
            }
            RecomendarError::UnsupportedModelType { found } => {
                write!(f, "Unsupported model type: {found}")
            }
            RecomendarError::NotFitted { operation } => {
                write!(f, "Model not fitted: cannot {operation} before fit")
            }
            RecomendarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            RecomendarError::Io(e) => write!(f, "I/O error: {e}"),
            RecomendarError::Csv(msg) => write!(f, "CSV error: {msg}"),
            RecomendarError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            RecomendarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecomendarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecomendarError {
    fn from(err: std::io::Error) -> Self {
        RecomendarError::Io(err)
    }
}

impl From<csv::Error> for RecomendarError {
    fn from(err: csv::Error) -> Self {
        RecomendarError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for RecomendarError {
    fn from(err: serde_json::Error) -> Self {
        RecomendarError::Serialization(err.to_string())
    }
}

impl From<&str> for RecomendarError {
    fn from(msg: &str) -> Self {
        RecomendarError::Other(msg.to_string())
    }
}

impl From<String> for RecomendarError {
    fn from(msg: String) -> Self {
        RecomendarError::Other(msg)
    }
}

impl RecomendarError {
    /// Create a not-fitted error naming the attempted operation.
    #[must_use]
    pub fn not_fitted(operation: &str) -> Self {
        Self::NotFitted {
            operation: operation.to_string(),
        }
    }

    /// Create a missing-column error with the table it was expected in.
    #[must_use]
    pub fn missing_column(column: &str, table: &str) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
            table: table.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = RecomendarError::missing_column("director", "user_data.csv");
        let msg = err.to_string();
        assert!(msg.contains("director"));
        assert!(msg.contains("user_data.csv"));
    }

    #[test]
    fn test_unsupported_model_type_display() {
        let err = RecomendarError::UnsupportedModelType {
            found: "RandomForest".to_string(),
        };
        assert!(err.to_string().contains("Unsupported model type"));
        assert!(err.to_string().contains("RandomForest"));
    }

    #[test]
    fn test_not_fitted_display() {
        let err = RecomendarError::not_fitted("kneighbors");
        assert!(err.to_string().contains("not fitted"));
        assert!(err.to_string().contains("kneighbors"));
    }

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = RecomendarError::InvalidHyperparameter {
            param: "test_size".to_string(),
            value: "1.5".to_string(),
            constraint: "0 < test_size < 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("test_size"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_from_str() {
        let err: RecomendarError = "boom".into();
        assert!(matches!(err, RecomendarError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: RecomendarError = io_err.into();
        assert!(matches!(err, RecomendarError::Io(_)));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = RecomendarError::Io(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        let err = RecomendarError::Other("x".to_string());
        assert!(err.source().is_none());
    }
}

//! Error types for rec-cli.

use std::process::ExitCode;
use thiserror::Error;

use recomendar::error::RecomendarError;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Unsupported model kind in the descriptor
    #[error("Unsupported model type: {0}")]
    UnsupportedModelType(String),

    /// Model rebuilt from a parameter-only descriptor was queried
    #[error("{0}")]
    NotFitted(String),

    /// Input table is missing an expected column
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other pipeline failure
    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

impl From<RecomendarError> for CliError {
    fn from(err: RecomendarError) -> Self {
        match err {
            RecomendarError::UnsupportedModelType { found } => {
                Self::UnsupportedModelType(found)
            }
            RecomendarError::NotFitted { .. } => Self::NotFitted(err.to_string()),
            RecomendarError::MissingColumn { .. } => Self::SchemaError(err.to_string()),
            RecomendarError::Io(e) => Self::Io(e),
            other => Self::Pipeline(other.to_string()),
        }
    }
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::UnsupportedModelType(_) => ExitCode::from(4),
            Self::NotFitted(_) => ExitCode::from(5),
            Self::SchemaError(_) => ExitCode::from(6),
            Self::Io(_) => ExitCode::from(3),
            Self::Pipeline(_) => ExitCode::from(1),
        }
    }
}

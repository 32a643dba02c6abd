//! Error type shared by every layout generator.

/// Errors from parsing layout arguments.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PerdidoError {
    #[error("unrecognized {operation} keyword: {keyword}")]
    UnrecognizedKeyword {
        operation: &'static str,
        keyword: String,
    },
    #[error("invalid fraction: {0}")]
    InvalidFraction(String),
    #[error("invalid length: {0}")]
    InvalidLength(String),
}

impl PerdidoError {
    pub(crate) fn unrecognized(operation: &'static str, keyword: &str) -> Self {
        tracing::debug!("rejecting {} keyword '{}'", operation, keyword);
        PerdidoError::UnrecognizedKeyword {
            operation,
            keyword: keyword.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PerdidoError>;

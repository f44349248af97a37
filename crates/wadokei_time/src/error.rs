//! Error types for instant and calendar handling.

use thiserror::Error;

/// Errors from UTC parsing or calendar validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input text is not a `YYYY-MM-DDThh:mm:ss[Z]` timestamp.
    #[error("UTC parse error: {0}")]
    Parse(String),
    /// A calendar field is outside its valid range.
    #[error("invalid calendar field: {0}")]
    InvalidField(&'static str),
}

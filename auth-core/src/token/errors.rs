use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("failed to encode token: {0}")]
    Encoding(String),

    #[error("token is expired")]
    Expired,

    #[error("token is malformed: {0}")]
    Malformed(String),
}

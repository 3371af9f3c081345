use thiserror::Error;

/// Error type for credential hashing operations.
///
/// Hashing failures are environmental, not caller errors: verification
/// mismatches are reported as `false`, never through this type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HashingError {
    #[error("password exceeds the {max} byte hashing limit (got {actual})")]
    PasswordTooLong { max: usize, actual: usize },

    #[error("password hashing failed: {0}")]
    Backend(String),
}

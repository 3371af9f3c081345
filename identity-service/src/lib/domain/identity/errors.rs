use auth_core::HashingError;
use auth_core::TokenError;
use auth_core::ValidationError;
use thiserror::Error;

/// Error for IdentityId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Error surface of the persistence collaborator.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The storage layer's uniqueness backstop fired.
    #[error("unique constraint violated")]
    UniqueViolation,

    #[error("identity not found: {0}")]
    NotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Top-level error for auth-gate operations.
///
/// Validation and conflict errors are recoverable and structured; hashing
/// and repository internals surface with no detail a caller could act on.
/// No failure is retried, every one is terminal for the call.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// Field-level violations, aggregated. The request never reached the
    /// uniqueness check or hashing.
    #[error("validation failed")]
    Validation(Vec<ValidationError>),

    /// Duplicate username or email. One generic message; which field
    /// collided is deliberately not disclosed.
    #[error("an account with these details already exists")]
    Conflict,

    /// Unknown identifier, inactive account, and wrong password all
    /// collapse into this one variant so callers cannot enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("malformed authorization header")]
    MalformedHeader,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("credential hashing failed: {0}")]
    Hashing(#[from] HashingError),

    #[error("identity not found: {0}")]
    NotFound(String),

    #[error("repository error: {0}")]
    Repository(String),
}

impl From<RepositoryError> for IdentityError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation => IdentityError::Conflict,
            RepositoryError::NotFound(id) => IdentityError::NotFound(id),
            RepositoryError::Backend(message) => IdentityError::Repository(message),
        }
    }
}

impl From<anyhow::Error> for IdentityError {
    fn from(err: anyhow::Error) -> Self {
        IdentityError::Repository(err.to_string())
    }
}

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single violated rule on a named field.
///
/// Requests aggregate these: one request may carry several, and any
/// non-empty set rejects the request before hashing or persistence runs.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    /// Field the violation applies to
    pub field: &'static str,

    /// Rule that was violated
    pub rule: Rule,

    /// Bounded summary of the offending value; passwords are summarized by
    /// length only and never echoed
    pub value: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}

/// The declarative rule a field violated.
#[derive(Debug, Clone, Error, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    #[error("value is required")]
    Required,

    #[error("shorter than the {min} character minimum")]
    TooShort { min: usize },

    #[error("longer than the {max} character maximum")]
    TooLong { max: usize },

    #[error("contains characters outside letters, digits, underscore, and hyphen")]
    InvalidCharacters,

    #[error("not a structurally valid email address")]
    InvalidEmail,

    #[error("must contain at least one digit")]
    MissingDigit,

    #[error("must contain at least one symbol")]
    MissingSymbol,

    #[error("must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("matches an injection pattern")]
    UnsafeContent,
}

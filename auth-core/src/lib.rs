//! Credential authentication core
//!
//! Reusable authentication components for identity services:
//! - Password hashing (bcrypt) with a tunable work factor
//! - Signed-token issuance and verification (HMAC JWT)
//! - Input sanitization and declarative credential validation
//!
//! Services compose these behind their own domain traits; nothing here
//! touches persistence or transport, and every component takes its secrets
//! and thresholds at construction time.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth_core::PasswordHasher;
//!
//! let hasher = PasswordHasher::default();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("wrong_password", &digest));
//! ```
//!
//! ## Tokens
//! ```
//! use auth_core::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", "my-service");
//! let token = codec
//!     .issue("user123", "user@example.com", None, Duration::minutes(30))
//!     .unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.user_id, "user123");
//! ```
//!
//! ## Validation and sanitization
//! ```
//! use auth_core::sanitize::sanitize;
//! use auth_core::CredentialValidator;
//!
//! let validator = CredentialValidator::default();
//! let errors = validator.validate_registration("jo", "not-an-email", "short", None);
//! assert!(!errors.is_empty());
//!
//! assert_eq!(sanitize("<b>bold</b>"), "bold");
//! ```

pub mod password;
pub mod sanitize;
pub mod token;
pub mod validate;

// Re-export commonly used items
pub use password::HashingError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use validate::CredentialPolicy;
pub use validate::CredentialValidator;
pub use validate::Rule;
pub use validate::ValidationError;

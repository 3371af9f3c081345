use super::errors::HashingError;

/// Longest input the hashing primitive accepts, in bytes.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Length of a digest in its fixed string format.
const DIGEST_LENGTH: usize = 60;

/// One-way password hashing with a tunable work factor.
///
/// Wraps bcrypt: each digest carries its own random salt and cost, so
/// hashing the same plaintext twice yields different digests that both
/// verify. The cost is injected at construction time and fixed for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with an explicit cost factor.
    ///
    /// # Arguments
    /// * `cost` - bcrypt work factor; raise as hardware improves
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Arguments
    /// * `plaintext` - Plaintext password to hash
    ///
    /// # Returns
    /// Digest string in the fixed bcrypt format
    ///
    /// # Errors
    /// * `PasswordTooLong` - Input exceeds the primitive's 72 byte limit
    /// * `Backend` - The primitive failed internally
    pub fn hash(&self, plaintext: &str) -> Result<String, HashingError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(HashingError::PasswordTooLong {
                max: MAX_PASSWORD_BYTES,
                actual: plaintext.len(),
            });
        }

        bcrypt::hash(plaintext, self.cost).map_err(|e| HashingError::Backend(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Any mismatch returns `false`, including a malformed digest: callers
    /// cannot distinguish a wrong password from a corrupt stored hash, and
    /// both present as authentication failure.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }

    /// Whether a value is already in digest form.
    ///
    /// Update paths use this so a stored digest is never hashed again,
    /// which would silently change the credential.
    pub fn is_digest(&self, candidate: &str) -> bool {
        candidate.len() == DIGEST_LENGTH && candidate.starts_with("$2")
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

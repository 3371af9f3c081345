use async_trait::async_trait;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::errors::RepositoryError;
use crate::domain::identity::models::Authenticated;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::RegisterCandidate;

/// Port for the request-time authentication decisions the transport
/// collaborator consumes.
#[async_trait]
pub trait AuthGatePort: Send + Sync + 'static {
    /// Register a new identity from raw candidate input.
    ///
    /// Runs sanitization and validation, then the uniqueness check, then
    /// hashing, then creation, in that order.
    ///
    /// # Arguments
    /// * `candidate` - Raw username, email, password, and optional avatar
    ///
    /// # Returns
    /// The created identity
    ///
    /// # Errors
    /// * `Validation` - One or more fields violate the credential rules
    /// * `Conflict` - Username or email is already taken
    /// * `Hashing` - The hashing primitive failed (environmental)
    async fn register(&self, candidate: RegisterCandidate) -> Result<Identity, IdentityError>;

    /// Verify credentials and issue a token.
    ///
    /// # Arguments
    /// * `identifier` - Username or email
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// The identity with its last-authenticated stamp updated, plus the
    /// issued token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier, inactive account, or
    ///   wrong password; indistinguishable by design
    async fn authenticate_credentials(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Authenticated, IdentityError>;

    /// Extract and verify the bearer token from an Authorization header.
    ///
    /// Every protected-route request passes through here exactly once.
    ///
    /// # Arguments
    /// * `bearer_header` - Raw Authorization header value
    ///
    /// # Returns
    /// The subject identity id for downstream use
    ///
    /// # Errors
    /// * `MalformedHeader` - Header is not the exact `Bearer <token>` shape
    /// * `Token` - Token is expired or malformed
    fn authorize(&self, bearer_header: &str) -> Result<IdentityId, IdentityError>;

    /// Replace the stored credential after verifying the current one.
    ///
    /// # Errors
    /// * `Validation` - The new password violates the credential rules
    /// * `InvalidCredentials` - Unknown identifier or wrong current password
    async fn change_password(
        &self,
        identifier: &str,
        current: &str,
        new_password: &str,
    ) -> Result<(), IdentityError>;

    /// Soft-remove an identity from active lookups.
    ///
    /// # Errors
    /// * `NotFound` - No identity with this id
    async fn deactivate(&self, id: &IdentityId) -> Result<(), IdentityError>;
}

/// Persistence operations for the identity aggregate.
///
/// The storage implementation must enforce username/email uniqueness as a
/// backstop to the gate's application-level check, and must exclude
/// soft-deleted identities from lookups.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Find an active identity whose username or email equals `identifier`.
    ///
    /// # Returns
    /// Optional identity (None if not found or soft-deleted)
    ///
    /// # Errors
    /// * `Backend` - Storage operation failed
    async fn find_by_username_or_email(
        &self,
        identifier: &str,
    ) -> Result<Option<Identity>, RepositoryError>;

    /// Persist a new identity.
    ///
    /// # Errors
    /// * `UniqueViolation` - Username or email already stored
    /// * `Backend` - Storage operation failed
    async fn create(&self, identity: Identity) -> Result<Identity, RepositoryError>;

    /// Persist changes to an existing identity.
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `Backend` - Storage operation failed
    async fn save(&self, identity: Identity) -> Result<Identity, RepositoryError>;

    /// Soft-remove an identity: it stays addressable for audit but
    /// disappears from active lookups.
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `Backend` - Storage operation failed
    async fn soft_delete(&self, id: &IdentityId) -> Result<(), RepositoryError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use auth_core::sanitize;
use auth_core::CredentialValidator;
use auth_core::PasswordHasher;
use auth_core::TokenCodec;
use auth_core::TokenError;
use chrono::Duration;
use chrono::Utc;

use crate::config::Config;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Authenticated;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::RegisterCandidate;
use crate::domain::identity::ports::AuthGatePort;
use crate::domain::identity::ports::IdentityRepository;

/// Scheme expected in the Authorization header.
const BEARER_SCHEME: &str = "Bearer";

/// The request-time authentication orchestrator.
///
/// Composes the credential hasher, token codec, and validator over the
/// persistence port. One instance serves all concurrent requests: the
/// signing secret, cost factor, and thresholds are fixed at construction,
/// and no lock is held across a hashing call.
pub struct AuthGate<R>
where
    R: IdentityRepository,
{
    repository: Arc<R>,
    hasher: PasswordHasher,
    codec: TokenCodec,
    validator: CredentialValidator,
    token_ttl: Duration,
}

impl<R> AuthGate<R>
where
    R: IdentityRepository,
{
    /// Build a gate from configuration.
    ///
    /// Each component receives its secrets and thresholds here, explicitly;
    /// there is no process-wide configuration state.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `config` - Startup configuration
    pub fn new(repository: Arc<R>, config: &Config) -> Self {
        Self {
            repository,
            hasher: PasswordHasher::new(config.security.bcrypt_cost),
            codec: TokenCodec::new(config.jwt.secret.as_bytes(), config.jwt.issuer.clone()),
            validator: CredentialValidator::new(config.security.policy()),
            token_ttl: Duration::minutes(config.jwt.ttl_minutes),
        }
    }

    /// Hash a plaintext secret unless it is already in digest form.
    ///
    /// Re-hashing a stored digest would silently change the credential, so
    /// every path that persists a secret routes through this guard.
    fn digest_for_storage(&self, secret: &str) -> Result<String, IdentityError> {
        if self.hasher.is_digest(secret) {
            Ok(secret.to_string())
        } else {
            Ok(self.hasher.hash(secret)?)
        }
    }
}

#[async_trait]
impl<R> AuthGatePort for AuthGate<R>
where
    R: IdentityRepository,
{
    async fn register(&self, candidate: RegisterCandidate) -> Result<Identity, IdentityError> {
        // Cheapest checks first: hashing cost is never paid for a request
        // that fails validation or collides.
        let username = sanitize::sanitize(&candidate.username);
        let email = sanitize::normalize_email(&candidate.email);
        let avatar = candidate
            .avatar
            .as_deref()
            .map(sanitize::sanitize)
            .filter(|avatar| !avatar.is_empty());

        let violations = self.validator.validate_registration(
            &username,
            &email,
            &candidate.password,
            avatar.as_deref(),
        );
        if !violations.is_empty() {
            return Err(IdentityError::Validation(violations));
        }

        let username_taken = self
            .repository
            .find_by_username_or_email(&username)
            .await?
            .is_some();
        if username_taken
            || self
                .repository
                .find_by_username_or_email(&email)
                .await?
                .is_some()
        {
            tracing::debug!(username = %username, "registration rejected: identifier taken");
            return Err(IdentityError::Conflict);
        }

        let digest = self.digest_for_storage(&candidate.password)?;
        let identity = Identity::new(username, email, digest, avatar);

        let created = self.repository.create(identity).await?;
        tracing::info!(identity_id = %created.id, "identity registered");

        Ok(created)
    }

    async fn authenticate_credentials(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Authenticated, IdentityError> {
        let identifier = identifier.trim();

        let Some(mut identity) = self.repository.find_by_username_or_email(identifier).await?
        else {
            tracing::warn!("authentication failed: unknown identifier");
            return Err(IdentityError::InvalidCredentials);
        };

        if !identity.active {
            tracing::warn!(identity_id = %identity.id, "authentication failed: inactive identity");
            return Err(IdentityError::InvalidCredentials);
        }

        if !self.hasher.verify(password, &identity.password_digest) {
            tracing::warn!(identity_id = %identity.id, "authentication failed: digest mismatch");
            return Err(IdentityError::InvalidCredentials);
        }

        let now = Utc::now();
        identity.last_authenticated = Some(now);
        identity.updated_at = now;
        let identity = self.repository.save(identity).await?;

        let role = identity.role.to_string();
        let token = self.codec.issue(
            &identity.id.to_string(),
            &identity.email,
            Some(role.as_str()),
            self.token_ttl,
        )?;

        tracing::debug!(identity_id = %identity.id, "credentials authenticated");
        Ok(Authenticated { identity, token })
    }

    fn authorize(&self, bearer_header: &str) -> Result<IdentityId, IdentityError> {
        let parts: Vec<&str> = bearer_header.split(' ').collect();
        let [scheme, token] = parts.as_slice() else {
            return Err(IdentityError::MalformedHeader);
        };
        if *scheme != BEARER_SCHEME {
            return Err(IdentityError::MalformedHeader);
        }

        let claims = self.codec.verify(token)?;

        IdentityId::from_string(&claims.user_id).map_err(|_| {
            IdentityError::Token(TokenError::Malformed(
                "subject is not a valid identity id".to_string(),
            ))
        })
    }

    async fn change_password(
        &self,
        identifier: &str,
        current: &str,
        new_password: &str,
    ) -> Result<(), IdentityError> {
        // Rule check before any lookup or digest work.
        let violations = self.validator.validate_password(new_password);
        if !violations.is_empty() {
            return Err(IdentityError::Validation(violations));
        }

        let Some(mut identity) = self
            .repository
            .find_by_username_or_email(identifier.trim())
            .await?
        else {
            return Err(IdentityError::InvalidCredentials);
        };

        if !self.hasher.verify(current, &identity.password_digest) {
            tracing::warn!(identity_id = %identity.id, "password change failed: digest mismatch");
            return Err(IdentityError::InvalidCredentials);
        }

        identity.password_digest = self.digest_for_storage(new_password)?;
        identity.updated_at = Utc::now();
        self.repository.save(identity).await?;

        Ok(())
    }

    async fn deactivate(&self, id: &IdentityId) -> Result<(), IdentityError> {
        self.repository.soft_delete(id).await?;
        tracing::info!(identity_id = %id, "identity deactivated");

        Ok(())
    }
}

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use identity_service::config::Config;
use identity_service::config::JwtConfig;
use identity_service::config::SecurityConfig;
use identity_service::domain::identity::errors::RepositoryError;
use identity_service::domain::identity::models::Identity;
use identity_service::domain::identity::models::IdentityId;
use identity_service::domain::identity::ports::IdentityRepository;
use uuid::Uuid;

/// In-memory stand-in for the persistence collaborator.
///
/// Enforces username/email uniqueness on create, as the storage layer must
/// as a backstop, and excludes soft-deleted identities from lookups.
#[derive(Default)]
pub struct InMemoryIdentityRepository {
    rows: RwLock<HashMap<Uuid, Identity>>,
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_username_or_email(
        &self,
        identifier: &str,
    ) -> Result<Option<Identity>, RepositoryError> {
        let rows = self.rows.read().expect("lock poisoned");

        Ok(rows
            .values()
            .find(|identity| {
                identity.deleted_at.is_none()
                    && (identity.username == identifier || identity.email == identifier)
            })
            .cloned())
    }

    async fn create(&self, identity: Identity) -> Result<Identity, RepositoryError> {
        let mut rows = self.rows.write().expect("lock poisoned");

        // The unique index covers soft-deleted rows too.
        let duplicate = rows.values().any(|existing| {
            existing.username == identity.username || existing.email == identity.email
        });
        if duplicate {
            return Err(RepositoryError::UniqueViolation);
        }

        rows.insert(identity.id.0, identity.clone());
        Ok(identity)
    }

    async fn save(&self, identity: Identity) -> Result<Identity, RepositoryError> {
        let mut rows = self.rows.write().expect("lock poisoned");

        if !rows.contains_key(&identity.id.0) {
            return Err(RepositoryError::NotFound(identity.id.to_string()));
        }

        rows.insert(identity.id.0, identity.clone());
        Ok(identity)
    }

    async fn soft_delete(&self, id: &IdentityId) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().expect("lock poisoned");

        let Some(identity) = rows.get_mut(&id.0) else {
            return Err(RepositoryError::NotFound(id.to_string()));
        };

        identity.deleted_at = Some(chrono::Utc::now());
        identity.active = false;
        Ok(())
    }
}

pub const TEST_SECRET: &str = "integration_secret_at_least_32_bytes!";

/// Test configuration with the minimum hashing cost to keep the suite fast.
pub fn test_config() -> Config {
    Config {
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            ttl_minutes: 30,
            issuer: "identity-service".to_string(),
        },
        security: SecurityConfig {
            bcrypt_cost: 4,
            username_min_length: 3,
            username_max_length: 32,
            password_min_length: 8,
            password_max_length: 72,
            password_require_digit: true,
            password_require_symbol: true,
            password_require_uppercase: true,
            password_require_lowercase: true,
        },
    }
}

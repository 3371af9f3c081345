use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::identity::errors::IdentityIdError;
use crate::domain::identity::errors::RoleError;

/// The authenticated principal.
///
/// The stored secret is always a digest, never the plaintext: the
/// constructor takes a finished digest, and no update path re-hashes one.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: IdentityId,
    pub username: String,
    pub email: String,
    pub password_digest: String,
    pub avatar: Option<String>,
    pub role: Role,
    pub active: bool,
    pub last_authenticated: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Assemble a freshly registered identity.
    ///
    /// # Arguments
    /// * `username` - Sanitized, validated username
    /// * `email` - Normalized, validated email
    /// * `password_digest` - Hashed credential secret
    /// * `avatar` - Optional sanitized avatar reference
    ///
    /// # Returns
    /// Identity with role `user`, active, and a fresh random id
    pub fn new(
        username: String,
        email: String,
        password_digest: String,
        avatar: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: IdentityId::new(),
            username,
            email,
            password_digest,
            avatar,
            role: Role::User,
            active: true,
            last_authenticated: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Whether the identity has been soft-removed.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Identity unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityId(pub Uuid);

impl IdentityId {
    /// Generate a new random identity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identity ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdentityIdError> {
        Uuid::parse_str(s)
            .map(IdentityId)
            .map_err(|e| IdentityIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for IdentityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role label carried by an identity.
///
/// The label travels with the identity and its tokens; authorization
/// decisions over it belong to downstream handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
    Guest,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Guest => "guest",
        };
        f.write_str(label)
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            "guest" => Ok(Role::Guest),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

/// Raw registration input as supplied by the transport collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCandidate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Result of successful credential authentication.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub identity: Identity,
    pub token: String,
}

/// Outward-facing projection of an identity.
///
/// The hashed secret never appears in any outward payload; this struct is
/// the only shape handed back to the transport collaborator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PublicIdentity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: Role,
    pub active: bool,
    pub last_authenticated: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<&Identity> for PublicIdentity {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.clone(),
            email: identity.email.clone(),
            avatar: identity.avatar.clone(),
            role: identity.role,
            active: identity.active,
            last_authenticated: identity.last_authenticated,
            created_at: identity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity::new(
            "john_doe".to_string(),
            "john@example.com".to_string(),
            "$2b$12$abcdefghijklmnopqrstuvabcdefghijklmnopqrstuvabcdefghi".to_string(),
            None,
        )
    }

    #[test]
    fn test_new_identity_defaults() {
        let identity = identity();

        assert_eq!(identity.role, Role::User);
        assert!(identity.active);
        assert!(identity.last_authenticated.is_none());
        assert!(!identity.is_deleted());
    }

    #[test]
    fn test_identity_id_round_trip() {
        let id = IdentityId::new();
        let parsed = IdentityId::from_string(&id.to_string()).expect("round trip failed");
        assert_eq!(parsed, id);

        assert!(IdentityId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::User, Role::Guest] {
            let parsed: Role = role.to_string().parse().expect("round trip failed");
            assert_eq!(parsed, role);
        }

        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_public_projection_excludes_digest() {
        let identity = identity();
        let public = PublicIdentity::from(&identity);

        let encoded = serde_json::to_string(&public).expect("serialization failed");
        assert!(!encoded.contains(&identity.password_digest));
        assert!(encoded.contains("john_doe"));
    }
}

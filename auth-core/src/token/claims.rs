use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed-token payload binding an identity to an expiry window.
///
/// Strongly typed: decoding enforces the presence of every field except the
/// optional role echo, so a token missing a required claim never parses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject identity id
    pub user_id: String,

    /// Email echo for downstream display
    pub email: String,

    /// Role echo, when the issuer chose to include one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Build claims expiring `ttl` from now.
    ///
    /// `iat` is stamped at call time, so claims for the same subject built
    /// twice are not identical.
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        role: Option<String>,
        issuer: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: user_id.into(),
            email: email.into(),
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: issuer.into(),
        }
    }
}

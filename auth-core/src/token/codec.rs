use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed, time-bounded authentication tokens.
///
/// Symmetric HMAC signing (HS256). The secret and issuer are injected at
/// construction time; there is no process-wide signing state. Issued tokens
/// cannot be revoked individually, so compromise is bounded only by the
/// expiry window.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
}

impl TokenCodec {
    /// Create a codec over a signing secret.
    ///
    /// # Arguments
    /// * `secret` - HMAC secret; at least 256 bits for HS256
    /// * `issuer` - Value stamped into the `iss` claim of every token
    pub fn new(secret: &[u8], issuer: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer: issuer.into(),
        }
    }

    /// Issue a token for a subject.
    ///
    /// # Arguments
    /// * `user_id` - Subject identity id
    /// * `email` - Email echo
    /// * `role` - Optional role echo
    /// * `ttl` - Time until the token expires
    ///
    /// # Errors
    /// * `Encoding` - Claim serialization or signing failed
    pub fn issue(
        &self,
        user_id: &str,
        email: &str,
        role: Option<&str>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(
            user_id,
            email,
            role.map(str::to_owned),
            self.issuer.clone(),
            ttl,
        );

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// The signature must validate under the configured algorithm: a token
    /// whose header names any other algorithm is malformed, never silently
    /// accepted. Expiry is strict, `exp` must be in the future with zero
    /// leeway.
    ///
    /// # Errors
    /// * `Expired` - `exp` is in the past
    /// * `Malformed` - Structurally invalid, signature mismatch, or
    ///   unexpected algorithm
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, "identity-service")
    }

    #[test]
    fn test_issue_and_verify() {
        let codec = codec();
        let token = codec
            .issue("user123", "user@example.com", Some("user"), Duration::minutes(30))
            .expect("issuing failed");

        let claims = codec.verify(&token).expect("verification failed");
        assert_eq!(claims.user_id, "user123");
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.role.as_deref(), Some("user"));
        assert_eq!(claims.iss, "identity-service");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_verify_expired_token() {
        let codec = codec();
        let token = codec
            .issue("user123", "user@example.com", None, Duration::minutes(-2))
            .expect("issuing failed");

        assert_eq!(codec.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_tampered_signature() {
        let codec = codec();
        let token = codec
            .issue("user123", "user@example.com", None, Duration::minutes(30))
            .expect("issuing failed");

        // Flip one character in the middle of the signature segment.
        let (head, signature) = token.rsplit_once('.').expect("compact encoding");
        let mut bytes = signature.as_bytes().to_vec();
        let middle = bytes.len() / 2;
        bytes[middle] = if bytes[middle] == b'A' { b'B' } else { b'A' };
        let tampered = format!("{}.{}", head, String::from_utf8(bytes).expect("ascii"));

        assert!(matches!(
            codec.verify(&tampered),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_verify_rejects_foreign_algorithm() {
        let codec = codec();
        let claims = Claims::new(
            "user123",
            "user@example.com",
            None,
            "identity-service",
            Duration::minutes(30),
        );

        // Same secret, different HMAC variant: algorithm confusion must be
        // treated as malformed.
        let foreign = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("encoding failed");

        assert!(matches!(
            codec.verify(&foreign),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let token = codec()
            .issue("user123", "user@example.com", None, Duration::minutes(30))
            .expect("issuing failed");

        let other = TokenCodec::new(b"another_secret_key_32_bytes_long!!", "identity-service");
        assert!(matches!(other.verify(&token), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_verify_garbage_input() {
        assert!(matches!(
            codec().verify("not.a.token"),
            Err(TokenError::Malformed(_))
        ));
    }
}

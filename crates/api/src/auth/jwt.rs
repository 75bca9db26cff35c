//! JWT access-token issuance/validation and refresh-token helpers.
//!
//! Access tokens are HS256-signed JWTs carrying a [`Claims`] payload with the
//! user id and role. Refresh tokens are opaque random strings; only their
//! SHA-256 hash is stored in `user_sessions`, so a database leak does not
//! compromise active sessions.

use flicks_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The user's role name (`"user"` or `"admin"`).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
/// Default refresh token expiry in days, matching the original platform's
/// 7-day session lifetime.
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

/// Configuration for JWT token issuance and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 7).
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }

    /// Issue an HS256 access token for the given user.
    pub fn issue_access_token(
        &self,
        user_id: DbId,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            role: role.to_string(),
            exp: now + self.access_token_expiry_mins * 60,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(), // HS256
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Validate and decode an access token, returning the embedded [`Claims`].
    ///
    /// Signature, expiration, and issued-at are checked automatically.
    pub fn validate_access_token(
        &self,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(), // HS256, validates exp
        )?;
        Ok(token_data.claims)
    }
}

/// Generate a cryptographically random refresh token.
///
/// Returns `(plaintext_token, sha256_hex_hash)`. The plaintext goes to the
/// client; only the hash is persisted.
pub fn generate_refresh_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_refresh_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a refresh token.
///
/// Use this to compare an incoming refresh token against the stored hash.
pub fn hash_refresh_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        }
    }

    #[test]
    fn test_issue_and_validate_access_token() {
        let config = test_config();
        let token = config
            .issue_access_token(42, "admin")
            .expect("token issuance should succeed");

        let claims = config
            .validate_access_token(&token)
            .expect("token validation should succeed");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually build an already-expired token, well past the default
        // 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            role: "user".to_string(),
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(
            config.validate_access_token(&token).is_err(),
            "expired token must fail validation"
        );
    }

    #[test]
    fn test_token_rejected_under_different_secret() {
        let config_a = test_config();
        let config_b = JwtConfig {
            secret: "a-completely-different-secret".to_string(),
            ..test_config()
        };

        let token = config_a
            .issue_access_token(1, "user")
            .expect("token issuance should succeed");

        assert!(
            config_b.validate_access_token(&token).is_err(),
            "token signed with a different secret must fail"
        );
    }

    #[test]
    fn test_refresh_token_hash_is_stable() {
        let (plaintext, hash) = generate_refresh_token();

        assert_eq!(hash, hash_refresh_token(&plaintext));
        // SHA-256 hex digest.
        assert_eq!(hash.len(), 64);
    }
}

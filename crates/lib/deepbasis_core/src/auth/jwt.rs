//! JWT token issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Claims embedded in both access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — the authenticated user's ID.
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// Signs and verifies compact expiring tokens (HS256).
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenCodec {
    /// Create a codec from the server-held signing secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a signed token for `user_id` expiring after `ttl`.
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, Error> {
        let now = Utc::now();
        let claims = TokenClaims {
            user_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| Error::Internal(format!("jwt encode: {e}")))
    }

    /// Verify a token, returning the claims on success.
    ///
    /// `None` covers every failure mode: malformed token, bad signature,
    /// expiry, or a missing subject claim. The caller turns that into a
    /// domain error.
    pub fn verify(&self, token: &str) -> Option<TokenClaims> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        // No leeway: a token past its expiry is invalid immediately.
        validation.leeway = 0;
        decode::<TokenClaims>(token, &self.decoding, &validation)
            .ok()
            .map(|data| data.claims)
    }
}

//! Session Token
//!
//! Stateless bearer token: `<user_id>.<expires_at_ms>.<signature>`, where the
//! signature is unpadded base64url HMAC-SHA256 over `<user_id>.<expires_at_ms>`.
//! Nothing is stored server side; a token stays valid until it expires.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use platform::crypto;

/// Decoded, verified token claims
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken {
    pub user_id: UserId,
    pub expires_at_ms: i64,
}

/// Why a presented token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    Malformed,
    BadSignature,
    Expired,
}

impl SessionToken {
    pub fn issue(user_id: UserId, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
        }
    }

    fn payload(&self) -> String {
        format!("{}.{}", self.user_id, self.expires_at_ms)
    }

    pub fn sign(&self, secret: &[u8; crypto::SECRET_LEN]) -> String {
        let payload = self.payload();
        let signature = crypto::sign(secret, payload.as_bytes());
        format!("{payload}.{signature}")
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expires_at_ms)
    }

    /// Parse and verify a presented token
    pub fn verify(
        token: &str,
        secret: &[u8; crypto::SECRET_LEN],
        now: DateTime<Utc>,
    ) -> Result<Self, TokenRejection> {
        let (payload, signature) = token.rsplit_once('.').ok_or(TokenRejection::Malformed)?;
        let (user_id, expires_at_ms) = payload.split_once('.').ok_or(TokenRejection::Malformed)?;

        if !crypto::verify(secret, payload.as_bytes(), signature) {
            return Err(TokenRejection::BadSignature);
        }

        let claims = Self {
            user_id: UserId::parse(user_id).ok_or(TokenRejection::Malformed)?,
            expires_at_ms: expires_at_ms
                .parse()
                .map_err(|_| TokenRejection::Malformed)?,
        };

        if claims.expires_at_ms <= now.timestamp_millis() {
            return Err(TokenRejection::Expired);
        }

        Ok(claims)
    }
}

//! Application Configuration
//!
//! Configuration for the Auth application layer.

use chrono::Duration;
use platform::crypto::{SECRET_LEN, random_secret};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Cookie consulted when no `Authorization` header is sent
    pub token_cookie_name: String,
    /// Token secret key for HMAC signing (32 bytes)
    pub token_secret: [u8; SECRET_LEN],
    /// Token lifetime (1 week)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

/// Signs with a fresh random secret, so tokens do not survive a restart
impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_cookie_name: "token".to_string(),
            token_secret: random_secret(),
            token_ttl: Duration::days(7),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

//! Process configuration from environment variables

use std::env;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Origins allowed by CORS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub origins: AllowedOrigins,
    pub auth: AuthConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections =
            parse_or("DATABASE_MAX_CONNECTIONS", &lookup, DEFAULT_MAX_CONNECTIONS)?;
        let port = parse_or("PORT", &lookup, DEFAULT_PORT)?;
        let origins = parse_origins(lookup("FRONTEND_ORIGINS").as_deref());

        let token_secret = match lookup("AUTH_TOKEN_SECRET") {
            Some(encoded) => Some(decode_secret(&encoded)?),
            None if cfg!(debug_assertions) => None,
            None => bail!("AUTH_TOKEN_SECRET must be set in production"),
        };
        let ttl_days = parse_or("AUTH_TOKEN_TTL_DAYS", &lookup, DEFAULT_TOKEN_TTL_DAYS)?;
        if ttl_days <= 0 {
            bail!("AUTH_TOKEN_TTL_DAYS must be positive");
        }

        let mut auth = match token_secret {
            Some(secret) => AuthConfig {
                token_secret: secret,
                ..AuthConfig::default()
            },
            None => {
                tracing::warn!("AUTH_TOKEN_SECRET not set, using a random secret");
                AuthConfig::default()
            }
        };
        auth.token_ttl = chrono::Duration::days(ttl_days);
        auth.password_pepper = lookup("AUTH_PASSWORD_PEPPER")
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        Ok(Self {
            database_url,
            max_connections,
            port,
            origins,
            auth,
        })
    }
}

fn parse_or<T>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is not valid: {raw:?}")),
    }
}

/// `*` or unset allows any origin
fn parse_origins(raw: Option<&str>) -> AllowedOrigins {
    match raw.map(str::trim) {
        None | Some("") | Some("*") => AllowedOrigins::Any,
        Some(list) => AllowedOrigins::List(
            list.split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect(),
        ),
    }
}

fn decode_secret(encoded: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .context("AUTH_TOKEN_SECRET must be base64")?;

    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| {
            anyhow::anyhow!("AUTH_TOKEN_SECRET must decode to 32 bytes, got {}", bytes.len())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let secret = general_purpose::STANDARD.encode([7u8; 32]);
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/books"),
            ("AUTH_TOKEN_SECRET", secret.as_str()),
        ])
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.origins, AllowedOrigins::Any);
        assert_eq!(config.auth.token_secret, [7u8; 32]);
        assert_eq!(config.auth.token_ttl.num_days(), 7);
        assert!(config.auth.pepper().is_none());
    }

    #[test]
    fn test_database_url_required() {
        assert!(config(&[]).is_err());
    }

    #[test]
    fn test_rejects_short_secret_and_bad_port() {
        let short = general_purpose::STANDARD.encode([1u8; 16]);
        assert!(config(&[("DATABASE_URL", "x"), ("AUTH_TOKEN_SECRET", short.as_str())]).is_err());
        assert!(config(&[("DATABASE_URL", "x"), ("PORT", "eighty")]).is_err());
        assert!(config(&[("DATABASE_URL", "x"), ("AUTH_TOKEN_TTL_DAYS", "0")]).is_err());
    }

    #[test]
    fn test_origin_list() {
        match parse_origins(Some("http://localhost:3000, https://books.example")) {
            AllowedOrigins::List(origins) => {
                assert_eq!(origins.len(), 2);
                assert_eq!(origins[1], "https://books.example");
            }
            AllowedOrigins::Any => panic!("expected a list"),
        }
        assert_eq!(parse_origins(Some("*")), AllowedOrigins::Any);
    }
}

//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User signup with name + email + password
//! - Login with email + password, returning a signed bearer token
//! - `require_auth` middleware resolving the token to a
//!   [`kernel::principal::CurrentUser`]
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B length rules)
//! - Tokens are HMAC-SHA256 signed and expire after a fixed TTL
//! - Login failures do not reveal whether the email exists

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::{AuthAppState, auth_router, require_auth};

#[cfg(test)]
mod tests;

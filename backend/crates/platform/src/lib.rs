//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256 signing, Base64, random secrets)
//! - Password hashing (Argon2id, NIST SP 800-63B length rules)
//! - Credential extraction from request headers

pub mod credentials;
pub mod crypto;
pub mod password;

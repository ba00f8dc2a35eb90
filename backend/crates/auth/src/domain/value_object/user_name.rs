//! User Name Value Object
//!
//! Display name shown next to a user's reviews. Not unique and not used for
//! login.
//!
//! ## Invariants
//! - NFKC normalized, surrounding whitespace trimmed
//! - Length: 2 to 50 characters (code points, after normalization)
//! - No control characters

use derive_more::Display;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 2;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Please provide your name")]
    Empty,

    #[error("Name must be at least 2 characters")]
    TooShort,

    #[error("Name cannot exceed 50 characters")]
    TooLong,

    #[error("Name contains invalid characters")]
    InvalidCharacter,
}

/// Validated, normalized user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = input.as_ref().nfkc().collect();
        let name = normalized.trim();

        if name.is_empty() {
            return Err(UserNameError::Empty);
        }

        if name.chars().any(char::is_control) {
            return Err(UserNameError::InvalidCharacter);
        }

        let length = name.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort);
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong);
        }

        Ok(Self(name.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Authenticated caller
//!
//! The auth middleware resolves a token to a [`CurrentUser`] and stores it in
//! the request extensions; resource handlers read it back with
//! `Extension<CurrentUser>`. Neither side depends on the other's crate.

use crate::id::UserId;

/// Identity of the caller on a protected route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub name: String,
}

impl CurrentUser {
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
        }
    }

    /// True when `owner` is this caller
    pub fn owns(&self, owner: &UserId) -> bool {
        &self.user_id == owner
    }
}

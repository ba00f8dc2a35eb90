//! User Entity
//!
//! An account: display name, unique email and the password hash.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::principal::CurrentUser;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub name: UserName,
    /// Unique, lowercased
    pub email: Email,
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: UserName, email: Email, password: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password,
            created_at: now,
            updated_at: now,
        }
    }

    /// Identity handed to downstream handlers once authenticated
    pub fn to_principal(&self) -> CurrentUser {
        CurrentUser::new(self.user_id, self.name.as_str())
    }
}

//! Authenticate Use Case
//!
//! Resolves a presented session token to the caller's identity.

use std::sync::Arc;

use chrono::Utc;
use kernel::principal::CurrentUser;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::token::SessionToken;
use crate::error::{AuthError, AuthResult};

pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, token: Option<&str>) -> AuthResult<CurrentUser> {
        let token = token.ok_or(AuthError::TokenMissing)?;
        let claims = SessionToken::verify(token, &self.config.token_secret, Utc::now())?;

        let user = self
            .user_repo
            .find_by_id(&claims.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(user.to_principal())
    }
}

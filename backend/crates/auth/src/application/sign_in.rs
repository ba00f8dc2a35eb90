//! Sign In Use Case
//!
//! Verifies email + password and issues a signed session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::token::SessionToken;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
#[derive(Default)]
pub struct SignInInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let (Some(email), Some(password)) = (
            input.email.filter(|v| !v.trim().is_empty()),
            input.password.filter(|v| !v.is_empty()),
        ) else {
            return Err(AuthError::MissingCredentials);
        };

        let email = Email::new(&email).map_err(|_| AuthError::InvalidEmail)?;
        let password = RawPassword::for_login(password);

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            tracing::debug!(email = %email, "Sign in for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = SessionToken::issue(user.user_id, self.config.token_ttl, Utc::now());
        let token = session.sign(&self.config.token_secret);

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput {
            token,
            user_id: user.user_id,
            expires_at: session.expires_at(),
        })
    }
}

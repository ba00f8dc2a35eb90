//! Sign Up Use Case
//!
//! Creates a new user account. No token is issued; the client logs in next.

use std::sync::Arc;

use kernel::id::UserId;
use kernel::validation::ValidationError;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::{Email, EmailError},
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input, fields as received
#[derive(Default)]
pub struct SignUpInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

fn first_violation(err: impl ToString) -> AuthError {
    ValidationError::single(err.to_string()).into()
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let (Some(name), Some(email), Some(password), Some(confirm_password)) = (
            present(input.name),
            present(input.email),
            present(input.password),
            present(input.confirm_password),
        ) else {
            return Err(AuthError::MissingSignUpFields);
        };

        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let email = Email::new(&email);
        if matches!(email, Err(EmailError::InvalidFormat)) {
            return Err(AuthError::InvalidEmail);
        }

        if let Ok(email) = &email {
            if self.user_repo.exists_by_email(email).await? {
                return Err(AuthError::UserAlreadyExists);
            }
        }

        // Field rules in declaration order; only the first failure is reported
        let name = UserName::new(&name).map_err(first_violation)?;
        let email = email.map_err(first_violation)?;
        let password = RawPassword::new(password).map_err(first_violation)?;

        let password_hash = UserPassword::from_raw(&password, self.config.pepper())?;
        let user = User::new(name, email, password_hash);

        // The unique index still catches a concurrent sign-up for the same email
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_id: user.user_id,
        })
    }
}

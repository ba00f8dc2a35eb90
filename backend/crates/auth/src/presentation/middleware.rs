//! Auth Middleware
//!
//! Guards protected routes. Mount with
//! `axum::middleware::from_fn_with_state(state, require_auth::<R>)`; handlers
//! behind it read the caller with `Extension<CurrentUser>`.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::credentials::extract_token;

use crate::application::AuthenticateUseCase;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a valid session token
///
/// The token comes from `Authorization: Bearer`, or the token cookie when
/// the header is absent.
pub async fn require_auth<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_token(req.headers(), &state.config.token_cookie_name);

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());
    let current_user = use_case.execute(token.as_deref()).await?;

    tracing::debug!(user_id = %current_user.user_id, "Authenticated request");
    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}

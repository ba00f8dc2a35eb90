//! Unit tests for Auth crate
//!
//! Use cases and HTTP surface run against an in-memory user repository.

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use kernel::id::UserId;

    use crate::application::config::AuthConfig;
    use crate::domain::entity::user::User;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::email::Email;
    use crate::error::{AuthError, AuthResult};

    /// In-memory stand-in for `PgAuthRepository`; mirrors the unique email index
    #[derive(Clone, Default)]
    pub struct InMemoryUsers {
        users: Arc<Mutex<Vec<User>>>,
    }

    impl InMemoryUsers {
        pub fn count(&self) -> usize {
            self.users.lock().unwrap().len()
        }

        pub fn remove(&self, user_id: &UserId) {
            self.users.lock().unwrap().retain(|u| &u.user_id != user_id);
        }

        pub fn stored_hash(&self, email: &str) -> Option<String> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email.as_str() == email)
                .map(|u| u.password.as_phc_string().to_string())
        }
    }

    impl UserRepository for InMemoryUsers {
        async fn create(&self, user: &User) -> AuthResult<()> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == user.email) {
                return Err(AuthError::UserAlreadyExists);
            }
            users.push(user.clone());
            Ok(())
        }

        async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| &u.user_id == user_id).cloned())
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| &u.email == email).cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().any(|u| &u.email == email))
        }
    }

    pub fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::default())
    }

    pub fn sign_up_input(name: &str, email: &str, password: &str, confirm: &str) -> crate::application::SignUpInput {
        crate::application::SignUpInput {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            confirm_password: Some(confirm.to_string()),
        }
    }

    pub fn sign_in_input(email: &str, password: &str) -> crate::application::SignInInput {
        crate::application::SignInInput {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use chrono::Duration;

    use super::support::*;
    use crate::application::config::AuthConfig;
    use crate::application::{AuthenticateUseCase, SignInUseCase, SignUpInput, SignUpUseCase};
    use crate::domain::token::TokenRejection;
    use crate::error::AuthError;

    const PASSWORD: &str = "correct horse";

    #[tokio::test]
    async fn test_sign_up_sign_in_authenticate() {
        let repo = Arc::new(InMemoryUsers::default());
        let config = config();

        let signed_up = SignUpUseCase::new(repo.clone(), config.clone())
            .execute(sign_up_input("Ada", "Ada@Example.com", PASSWORD, PASSWORD))
            .await
            .unwrap();

        let signed_in = SignInUseCase::new(repo.clone(), config.clone())
            .execute(sign_in_input("ada@example.com", PASSWORD))
            .await
            .unwrap();
        assert_eq!(signed_in.user_id, signed_up.user_id);
        assert!(signed_in.expires_at.is_some());

        let me = AuthenticateUseCase::new(repo.clone(), config.clone())
            .execute(Some(&signed_in.token))
            .await
            .unwrap();
        assert_eq!(me.user_id, signed_up.user_id);
        assert_eq!(me.name, "Ada");
    }

    #[tokio::test]
    async fn test_stored_hash_is_not_plaintext() {
        let repo = Arc::new(InMemoryUsers::default());
        SignUpUseCase::new(repo.clone(), config())
            .execute(sign_up_input("Ada", "ada@example.com", PASSWORD, PASSWORD))
            .await
            .unwrap();

        let hash = repo.stored_hash("ada@example.com").unwrap();
        assert_ne!(hash, PASSWORD);
        assert!(hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_mismatched_passwords_create_nothing() {
        let repo = Arc::new(InMemoryUsers::default());
        let err = SignUpUseCase::new(repo.clone(), config())
            .execute(sign_up_input("Ada", "ada@example.com", PASSWORD, "different pw"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::PasswordMismatch));
        assert_eq!(err.to_string(), "Passwords do not match.");
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = Arc::new(InMemoryUsers::default());
        let use_case = SignUpUseCase::new(repo.clone(), config());

        use_case
            .execute(sign_up_input("Ada", "ada@example.com", PASSWORD, PASSWORD))
            .await
            .unwrap();
        let err = use_case
            .execute(sign_up_input("Other", "ADA@example.com", PASSWORD, PASSWORD))
            .await
            .unwrap_err();

        assert_eq!(err.kind().status_code(), 409);
        assert_eq!(err.to_string(), "User already exists.");
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_missing_or_blank_fields() {
        let use_case = SignUpUseCase::new(Arc::new(InMemoryUsers::default()), config());

        let err = use_case.execute(SignUpInput::default()).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingSignUpFields));

        let err = use_case
            .execute(sign_up_input("   ", "ada@example.com", PASSWORD, PASSWORD))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "All fields are required.");
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let use_case = SignUpUseCase::new(Arc::new(InMemoryUsers::default()), config());
        let err = use_case
            .execute(sign_up_input("Ada", "not-an-email", PASSWORD, PASSWORD))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format.");
        assert_eq!(err.kind().status_code(), 400);
    }

    #[tokio::test]
    async fn test_first_field_rule_is_reported() {
        let repo = Arc::new(InMemoryUsers::default());
        let use_case = SignUpUseCase::new(repo.clone(), config());

        let err = use_case
            .execute(sign_up_input("A", "ada@example.com", "short", "short"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(err.to_string(), "Name must be at least 2 characters");

        let err = use_case
            .execute(sign_up_input("Ada", "ada@example.com", "short", "short"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 8 characters long");
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_existing_email_checked_before_field_rules() {
        let repo = Arc::new(InMemoryUsers::default());
        let use_case = SignUpUseCase::new(repo.clone(), config());

        use_case
            .execute(sign_up_input("Ada", "ada@example.com", PASSWORD, PASSWORD))
            .await
            .unwrap();
        let err = use_case
            .execute(sign_up_input("A", "ada@example.com", "short", "short"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserAlreadyExists));
        assert_eq!(err.kind().status_code(), 409);
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_bad_credentials_share_one_message() {
        let repo = Arc::new(InMemoryUsers::default());
        let config = config();
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(sign_up_input("Ada", "ada@example.com", PASSWORD, PASSWORD))
            .await
            .unwrap();

        let use_case = SignInUseCase::new(repo.clone(), config.clone());
        let wrong_password = use_case
            .execute(sign_in_input("ada@example.com", "wrong horse"))
            .await
            .unwrap_err();
        let unknown_email = use_case
            .execute(sign_in_input("bob@example.com", PASSWORD))
            .await
            .unwrap_err();

        assert_eq!(wrong_password.kind().status_code(), 401);
        assert_eq!(wrong_password.to_string(), "Invalid email or password.");
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    }

    #[tokio::test]
    async fn test_sign_in_requires_both_fields() {
        let use_case = SignInUseCase::new(Arc::new(InMemoryUsers::default()), config());
        let err = use_case
            .execute(crate::application::SignInInput {
                email: Some("ada@example.com".to_string()),
                password: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Email and password are required.");
    }

    #[tokio::test]
    async fn test_authenticate_rejections() {
        let repo = Arc::new(InMemoryUsers::default());
        let config = config();
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(sign_up_input("Ada", "ada@example.com", PASSWORD, PASSWORD))
            .await
            .unwrap();
        let token = SignInUseCase::new(repo.clone(), config.clone())
            .execute(sign_in_input("ada@example.com", PASSWORD))
            .await
            .unwrap();

        let authenticate = AuthenticateUseCase::new(repo.clone(), config.clone());

        let err = authenticate.execute(None).await.unwrap_err();
        assert_eq!(err.to_string(), "Not authorized, token missing");

        let err = authenticate
            .execute(Some(&format!("{}x", token.token)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Not authorized, token invalid");

        // A token signed with another secret
        let foreign = AuthenticateUseCase::new(repo.clone(), Arc::new(AuthConfig::default()));
        assert!(matches!(
            foreign.execute(Some(&token.token)).await,
            Err(AuthError::TokenInvalid(TokenRejection::BadSignature))
        ));

        repo.remove(&token.user_id);
        let err = authenticate.execute(Some(&token.token)).await.unwrap_err();
        assert_eq!(err.to_string(), "Not authorized, user not found");
        assert_eq!(err.kind().status_code(), 401);
    }

    #[tokio::test]
    async fn test_expired_token() {
        let repo = Arc::new(InMemoryUsers::default());
        let config = Arc::new(AuthConfig {
            token_ttl: Duration::seconds(-1),
            ..AuthConfig::default()
        });
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(sign_up_input("Ada", "ada@example.com", PASSWORD, PASSWORD))
            .await
            .unwrap();
        let token = SignInUseCase::new(repo.clone(), config.clone())
            .execute(sign_in_input("ada@example.com", PASSWORD))
            .await
            .unwrap();

        let err = AuthenticateUseCase::new(repo, config)
            .execute(Some(&token.token))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid(TokenRejection::Expired)));
    }

    #[tokio::test]
    async fn test_pepper_must_match() {
        let repo = Arc::new(InMemoryUsers::default());
        let peppered = Arc::new(AuthConfig {
            password_pepper: Some(b"pepper".to_vec()),
            ..AuthConfig::default()
        });
        SignUpUseCase::new(repo.clone(), peppered.clone())
            .execute(sign_up_input("Ada", "ada@example.com", PASSWORD, PASSWORD))
            .await
            .unwrap();

        assert!(
            SignInUseCase::new(repo.clone(), peppered)
                .execute(sign_in_input("ada@example.com", PASSWORD))
                .await
                .is_ok()
        );
        assert!(
            SignInUseCase::new(repo, config())
                .execute(sign_in_input("ada@example.com", PASSWORD))
                .await
                .is_err()
        );
    }
}

#[cfg(test)]
mod http_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router, middleware};
    use kernel::principal::CurrentUser;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::*;
    use crate::application::config::AuthConfig;
    use crate::presentation::{AuthAppState, auth_router, require_auth};

    fn app() -> Router {
        let state = AuthAppState::new(InMemoryUsers::default(), AuthConfig::default());

        let protected = Router::new()
            .route(
                "/me",
                get(|Extension(me): Extension<CurrentUser>| async move { me.name }),
            )
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_auth::<InMemoryUsers>,
            ));

        Router::new().merge(auth_router(state)).merge(protected)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read(response: axum::response::Response) -> (StatusCode, Vec<u8>) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn sign_up_and_login(app: &Router) -> String {
        let (status, body) = read(
            app.clone()
                .oneshot(post_json(
                    "/signup",
                    json!({
                        "name": "Ada",
                        "email": "ada@example.com",
                        "password": "correct horse",
                        "confirmPassword": "correct horse"
                    }),
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "message": "Signup successful" })
        );

        let (status, body) = read(
            app.clone()
                .oneshot(post_json(
                    "/login",
                    json!({ "email": "ada@example.com", "password": "correct horse" }),
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_bearer_and_cookie_tokens() {
        let app = app();
        let token = sign_up_and_login(&app).await;

        let request = Request::get("/me")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = read(app.clone().oneshot(request).await.unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Ada");

        let request = Request::get("/me")
            .header(header::COOKIE, format!("token={token}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = read(app.oneshot(request).await.unwrap()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_token_is_401() {
        let request = Request::get("/me").body(Body::empty()).unwrap();
        let (status, body) = read(app().oneshot(request).await.unwrap()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "message": "Not authorized, token missing" })
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_400_with_message() {
        let request = Request::post("/signup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = read(app().oneshot(request).await.unwrap()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_duplicate_signup_over_http() {
        let app = app();
        sign_up_and_login(&app).await;

        let (status, body) = read(
            app.oneshot(post_json(
                "/signup",
                json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "password": "correct horse",
                    "confirmPassword": "correct horse"
                }),
            ))
            .await
            .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "message": "User already exists." })
        );
    }
}

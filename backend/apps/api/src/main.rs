//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use auth::{AuthAppState, PgAuthRepository, auth_router, require_auth};
use axum::{
    Json, Router,
    http::{Method, header},
    middleware,
    routing::get,
};
use catalog::{CatalogAppState, PgCatalogRepository, catalog_protected_router, catalog_public_router};
use kernel::error::app_error::AppError;
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AllowedOrigins, ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_state = AuthAppState::new(PgAuthRepository::new(pool.clone()), config.auth.clone());
    let catalog_state = CatalogAppState::new(PgCatalogRepository::new(pool));

    let protected = catalog_protected_router(catalog_state.clone()).route_layer(
        middleware::from_fn_with_state(auth_state.clone(), require_auth::<PgAuthRepository>),
    );

    let api = Router::new()
        .merge(auth_router(auth_state))
        .merge(catalog_public_router(catalog_state))
        .merge(protected);

    let app = app(api, &config.origins);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Top-level router: health check, the API under `/api`, a JSON 404 fallback,
/// tracing and CORS.
fn app(api: Router, origins: &AllowedOrigins) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors(origins))
}

async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors(origins: &AllowedOrigins) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Credentials cannot be combined with a wildcard origin
    match origins {
        AllowedOrigins::Any => cors.allow_origin(AllowOrigin::any()),
        AllowedOrigins::List(list) => cors
            .allow_origin(AllowOrigin::list(list.iter().cloned()))
            .allow_credentials(true),
    }
}

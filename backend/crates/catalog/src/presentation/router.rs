//! Catalog Routers
//!
//! Reads are public. Writes expect a `CurrentUser` extension, so the caller
//! must layer the auth middleware onto [`catalog_protected_router`].

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::domain::repository::{BookRepository, ReviewRepository};
use crate::presentation::handlers::{self, CatalogAppState};

/// Routes: `GET /books`, `GET /books/{id}`, `GET /search`.
pub fn catalog_public_router<R>(state: CatalogAppState<R>) -> Router
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/books", get(handlers::list_books::<R>))
        .route("/books/{id}", get(handlers::get_book::<R>))
        .route("/search", get(handlers::search_books::<R>))
        .with_state(state)
}

/// Routes: `POST /books`, `POST /books/{id}/reviews`, `PUT|DELETE /reviews/{id}`.
pub fn catalog_protected_router<R>(state: CatalogAppState<R>) -> Router
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/books", post(handlers::add_book::<R>))
        .route("/books/{id}/reviews", post(handlers::submit_review::<R>))
        .route(
            "/reviews/{id}",
            put(handlers::update_review::<R>).delete(handlers::delete_review::<R>),
        )
        .with_state(state)
}

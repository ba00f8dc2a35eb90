//! Catalog Error Types
//!
//! Book and review error variants. The `Display` text of each variant is the
//! message returned to the client.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationError;
use thiserror::Error;

use crate::domain::entity::review::ReviewAction;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Field rule violations, all of them
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid book ID")]
    InvalidBookId,

    #[error("Invalid review ID")]
    InvalidReviewId,

    #[error("Invalid pagination parameters")]
    InvalidPagination,

    #[error("Invalid pagination parameters for reviews")]
    InvalidReviewPagination,

    #[error("Invalid sort field")]
    InvalidSortField,

    #[error("Search query is required")]
    SearchQueryRequired,

    #[error("Invalid limit parameter")]
    InvalidLimit,

    #[error("Book not found")]
    BookNotFound,

    #[error("Review not found")]
    ReviewNotFound,

    /// One review per user and book
    #[error("You have already submitted a review for this book")]
    DuplicateReview,

    #[error("Unauthorized to {0} this review")]
    NotOwner(ReviewAction),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_)
            | CatalogError::InvalidBookId
            | CatalogError::InvalidReviewId
            | CatalogError::InvalidPagination
            | CatalogError::InvalidReviewPagination
            | CatalogError::InvalidSortField
            | CatalogError::SearchQueryRequired
            | CatalogError::InvalidLimit
            | CatalogError::DuplicateReview => ErrorKind::BadRequest,
            CatalogError::BookNotFound | CatalogError::ReviewNotFound => ErrorKind::NotFound,
            CatalogError::NotOwner(_) => ErrorKind::Forbidden,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::NotOwner(action) => {
                tracing::warn!(%action, "Review change by non-owner refused");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

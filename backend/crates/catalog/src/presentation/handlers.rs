//! HTTP Handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use kernel::error::app_error::AppError;
use kernel::principal::CurrentUser;
use std::sync::Arc;

use crate::application::{
    AddBookInput, AddBookUseCase, DeleteReviewUseCase, GetBookInput, GetBookUseCase,
    ListBooksInput, ListBooksUseCase, SearchBooksInput, SearchBooksUseCase, SubmitReviewInput,
    SubmitReviewUseCase, UpdateReviewInput, UpdateReviewUseCase,
};
use crate::domain::repository::{BookRepository, ReviewRepository};
use crate::error::CatalogResult;
use crate::presentation::dto::{
    AddBookRequest, AddBookResponse, BookDetailResponse, BookListResponse, DeleteResponse,
    ListBooksQuery, PageQuery, ReviewEnvelope, ReviewRequest, SearchQuery, SearchResponse,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> CatalogAppState<R>
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

/// POST /api/books
pub async fn add_book<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(caller): Extension<CurrentUser>,
    WithRejection(Json(req), _): WithRejection<Json<AddBookRequest>, AppError>,
) -> CatalogResult<(StatusCode, Json<AddBookResponse>)>
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddBookUseCase::new(state.repo.clone());

    let input = AddBookInput {
        title: req.title,
        author: req.author,
        genre: req.genre,
        description: req.description,
    };
    let book = use_case.execute(input, &caller).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddBookResponse {
            data: book.into(),
            message: "Book created successfully",
        }),
    ))
}

/// GET /api/books
pub async fn list_books<R>(
    State(state): State<CatalogAppState<R>>,
    WithRejection(Query(query), _): WithRejection<Query<ListBooksQuery>, AppError>,
) -> CatalogResult<Json<BookListResponse>>
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListBooksUseCase::new(state.repo.clone());

    let page = use_case
        .execute(ListBooksInput {
            author: query.author,
            genre: query.genre,
            page: query.page,
            limit: query.limit,
            sort: query.sort,
            order: query.order,
        })
        .await?;

    Ok(Json(page.into()))
}

/// GET /api/books/{id}
pub async fn get_book<R>(
    State(state): State<CatalogAppState<R>>,
    Path(book_id): Path<String>,
    WithRejection(Query(query), _): WithRejection<Query<PageQuery>, AppError>,
) -> CatalogResult<Json<BookDetailResponse>>
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetBookUseCase::new(state.repo.clone(), state.repo.clone());

    let detail = use_case
        .execute(GetBookInput {
            book_id,
            page: query.page,
            limit: query.limit,
        })
        .await?;

    Ok(Json(detail.into()))
}

/// GET /api/search
pub async fn search_books<R>(
    State(state): State<CatalogAppState<R>>,
    WithRejection(Query(query), _): WithRejection<Query<SearchQuery>, AppError>,
) -> CatalogResult<Json<SearchResponse>>
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = SearchBooksUseCase::new(state.repo.clone());

    let books = use_case
        .execute(SearchBooksInput {
            q: query.q,
            limit: query.limit,
        })
        .await?;

    Ok(Json(books.into()))
}

/// POST /api/books/{id}/reviews
pub async fn submit_review<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(caller): Extension<CurrentUser>,
    Path(book_id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<ReviewRequest>, AppError>,
) -> CatalogResult<(StatusCode, Json<ReviewEnvelope>)>
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitReviewUseCase::new(state.repo.clone());

    let review = use_case
        .execute(
            SubmitReviewInput {
                book_id,
                rating: req.rating,
                comment: req.comment.flatten(),
            },
            &caller,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewEnvelope {
            success: true,
            data: review.into(),
            message: "Review submitted successfully",
        }),
    ))
}

/// PUT /api/reviews/{id}
pub async fn update_review<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(caller): Extension<CurrentUser>,
    Path(review_id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<ReviewRequest>, AppError>,
) -> CatalogResult<Json<ReviewEnvelope>>
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateReviewUseCase::new(state.repo.clone());

    let review = use_case
        .execute(
            UpdateReviewInput {
                review_id,
                rating: req.rating,
                comment: req.comment,
            },
            &caller,
        )
        .await?;

    Ok(Json(ReviewEnvelope {
        success: true,
        data: review.into(),
        message: "Review updated successfully",
    }))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(caller): Extension<CurrentUser>,
    Path(review_id): Path<String>,
) -> CatalogResult<Json<DeleteResponse>>
where
    R: BookRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteReviewUseCase::new(state.repo.clone());

    use_case.execute(&review_id, &caller).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Review deleted successfully",
    }))
}

//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{BookId, ReviewId, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::{BookDetail, BookPage};
use crate::domain::entity::book::Book;
use crate::domain::entity::review::{Review, ReviewWithReviewer};
use crate::domain::value_object::comment::Comment;

// ============================================================================
// Books
// ============================================================================

/// Add book request; absent fields are reported by validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBooksQuery {
    pub author: Option<String>,
    pub genre: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// `page` / `limit` for the reviews embedded in a book
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.book_id,
            title: book.title,
            author: book.author,
            genre: book.genre,
            description: book.description,
            created_by: book.created_by,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddBookResponse {
    pub data: BookResponse,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_docs: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookListResponse {
    pub success: bool,
    pub data: Vec<BookResponse>,
    pub pagination: Pagination,
}

impl From<BookPage> for BookListResponse {
    fn from(page: BookPage) -> Self {
        Self {
            success: true,
            data: page.books.into_iter().map(BookResponse::from).collect(),
            pagination: Pagination {
                page: page.page.page,
                limit: page.page.limit,
                total_docs: page.total,
                total_pages: page.total_pages,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPagination {
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailData {
    pub book: BookResponse,
    pub avg_rating: f64,
    pub reviews: Vec<BookReviewResponse>,
    pub review_count: u64,
    pub review_pagination: ReviewPagination,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookDetailResponse {
    pub success: bool,
    pub data: BookDetailData,
}

impl From<BookDetail> for BookDetailResponse {
    fn from(detail: BookDetail) -> Self {
        Self {
            success: true,
            data: BookDetailData {
                book: detail.book.into(),
                avg_rating: detail.avg_rating,
                reviews: detail
                    .reviews
                    .into_iter()
                    .map(BookReviewResponse::from)
                    .collect(),
                review_count: detail.review_count,
                review_pagination: ReviewPagination {
                    page: detail.page.page,
                    limit: detail.page.limit,
                    total_pages: detail.total_pages,
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<BookResponse>,
    pub count: usize,
}

impl From<Vec<Book>> for SearchResponse {
    fn from(books: Vec<Book>) -> Self {
        Self {
            success: true,
            count: books.len(),
            data: books.into_iter().map(BookResponse::from).collect(),
        }
    }
}

// ============================================================================
// Reviews
// ============================================================================

/// Review body for both submit and update
///
/// `rating` stays untyped so that non-numeric values reach validation and
/// get the rating message instead of a JSON rejection. An explicit `null`
/// is kept apart from an absent field: a `null` rating is invalid and a
/// `null` comment clears the comment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewRequest {
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub comment: Option<Option<String>>,
}

/// `Some` for any field that appears in the body, `null` included
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: ReviewId,
    pub book: BookId,
    /// Author id
    pub user: UserId,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.review_id,
            book: review.book_id,
            user: review.user_id,
            rating: review.rating.value(),
            comment: review.comment.as_ref().map(Comment::to_string),
            edited_at: review.edited_at,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewerResponse {
    pub id: UserId,
    pub name: String,
}

/// A review as listed under its book, with the reviewer resolved
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookReviewResponse {
    pub id: ReviewId,
    pub book: BookId,
    pub user: ReviewerResponse,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewWithReviewer> for BookReviewResponse {
    fn from(entry: ReviewWithReviewer) -> Self {
        let review = entry.review;
        Self {
            id: review.review_id,
            book: review.book_id,
            user: ReviewerResponse {
                id: review.user_id,
                name: entry.reviewer_name,
            },
            rating: review.rating.value(),
            comment: review.comment.as_ref().map(Comment::to_string),
            edited_at: review.edited_at,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewEnvelope {
    pub success: bool,
    pub data: ReviewResponse,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

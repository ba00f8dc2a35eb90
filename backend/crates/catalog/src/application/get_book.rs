//! Get Book Use Case
//!
//! A book with its rating summary and one page of reviews.

use std::sync::Arc;

use kernel::id::BookId;

use crate::domain::entity::{book::Book, review::ReviewWithReviewer};
use crate::domain::repository::{BookRepository, ReviewRepository};
use crate::domain::value_object::paging::PageRequest;
use crate::error::{CatalogError, CatalogResult};

/// Default page size of the review list
pub const DEFAULT_REVIEW_LIMIT: u32 = 5;

#[derive(Default)]
pub struct GetBookInput {
    pub book_id: String,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug)]
pub struct BookDetail {
    pub book: Book,
    /// Mean of all ratings to one decimal, 0 without reviews
    pub avg_rating: f64,
    pub reviews: Vec<ReviewWithReviewer>,
    pub review_count: u64,
    pub page: PageRequest,
    pub total_pages: u64,
}

pub struct GetBookUseCase<B, R>
where
    B: BookRepository,
    R: ReviewRepository,
{
    books: Arc<B>,
    reviews: Arc<R>,
}

impl<B, R> GetBookUseCase<B, R>
where
    B: BookRepository,
    R: ReviewRepository,
{
    pub fn new(books: Arc<B>, reviews: Arc<R>) -> Self {
        Self { books, reviews }
    }

    pub async fn execute(&self, input: GetBookInput) -> CatalogResult<BookDetail> {
        let book_id = BookId::parse(&input.book_id).ok_or(CatalogError::InvalidBookId)?;

        let book = self
            .books
            .find_by_id(&book_id)
            .await?
            .ok_or(CatalogError::BookNotFound)?;

        let page = PageRequest::parse(
            input.page.as_deref(),
            input.limit.as_deref(),
            DEFAULT_REVIEW_LIMIT,
        )
        .ok_or(CatalogError::InvalidReviewPagination)?;

        let stats = self.reviews.stats_for_book(&book_id).await?;
        let reviews = self.reviews.list_for_book(&book_id, page).await?;

        Ok(BookDetail {
            book,
            avg_rating: stats.rounded_average(),
            reviews,
            review_count: stats.count,
            page,
            total_pages: page.total_pages(stats.count),
        })
    }
}

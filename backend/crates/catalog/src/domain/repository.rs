//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{BookId, ReviewId};

use crate::domain::entity::{
    book::Book,
    review::{Review, ReviewWithReviewer},
};
use crate::domain::value_object::{paging::PageRequest, rating::RatingStats, sort::BookSort};
use crate::error::CatalogResult;

/// Book listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring of the author; taken literally
    pub author: Option<String>,
    /// Exact genre
    pub genre: Option<String>,
}

impl BookFilter {
    /// Blank values are treated as absent
    pub fn new(author: Option<&str>, genre: Option<&str>) -> Self {
        let present = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            author: present(author),
            genre: present(genre),
        }
    }
}

/// Book repository trait
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    /// Create a new book
    async fn create(&self, book: &Book) -> CatalogResult<()>;

    /// Find book by ID
    async fn find_by_id(&self, book_id: &BookId) -> CatalogResult<Option<Book>>;

    /// One page of books matching `filter`
    async fn list(
        &self,
        filter: &BookFilter,
        sort: BookSort,
        page: PageRequest,
    ) -> CatalogResult<Vec<Book>>;

    /// Number of books matching `filter`
    async fn count(&self, filter: &BookFilter) -> CatalogResult<u64>;

    /// Case-insensitive substring match on title or author
    async fn search(&self, query: &str, limit: u32) -> CatalogResult<Vec<Book>>;
}

/// Review repository trait
#[trait_variant::make(ReviewRepository: Send)]
pub trait LocalReviewRepository {
    /// Create a new review
    ///
    /// Fails with `CatalogError::DuplicateReview` when the user already
    /// reviewed the book and `CatalogError::BookNotFound` when the book does
    /// not exist.
    async fn create(&self, review: &Review) -> CatalogResult<()>;

    /// Find review by ID
    async fn find_by_id(&self, review_id: &ReviewId) -> CatalogResult<Option<Review>>;

    /// Persist rating, comment and timestamps
    async fn update(&self, review: &Review) -> CatalogResult<()>;

    /// Delete a review
    async fn delete(&self, review_id: &ReviewId) -> CatalogResult<()>;

    /// One page of a book's reviews, newest first, with reviewer names
    async fn list_for_book(
        &self,
        book_id: &BookId,
        page: PageRequest,
    ) -> CatalogResult<Vec<ReviewWithReviewer>>;

    /// Count and mean rating over all of a book's reviews
    async fn stats_for_book(&self, book_id: &BookId) -> CatalogResult<RatingStats>;
}

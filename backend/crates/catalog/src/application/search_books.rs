//! Search Books Use Case

use std::sync::Arc;

use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::domain::value_object::paging::parse_positive;
use crate::error::{CatalogError, CatalogResult};

pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

#[derive(Default)]
pub struct SearchBooksInput {
    pub q: Option<String>,
    pub limit: Option<String>,
}

pub struct SearchBooksUseCase<B>
where
    B: BookRepository,
{
    books: Arc<B>,
}

impl<B> SearchBooksUseCase<B>
where
    B: BookRepository,
{
    pub fn new(books: Arc<B>) -> Self {
        Self { books }
    }

    pub async fn execute(&self, input: SearchBooksInput) -> CatalogResult<Vec<Book>> {
        let query = input
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or(CatalogError::SearchQueryRequired)?;

        let limit = parse_positive(input.limit.as_deref(), DEFAULT_SEARCH_LIMIT)
            .ok_or(CatalogError::InvalidLimit)?;

        self.books.search(query, limit).await
    }
}

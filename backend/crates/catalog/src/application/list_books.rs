//! List Books Use Case
//!
//! Filtered, sorted, paginated catalog listing.

use std::sync::Arc;

use crate::domain::entity::book::Book;
use crate::domain::repository::{BookFilter, BookRepository};
use crate::domain::value_object::{paging::PageRequest, sort::BookSort};
use crate::error::{CatalogError, CatalogResult};

/// Default page size of the book listing
pub const DEFAULT_BOOK_LIMIT: u32 = 10;

/// Raw query values
#[derive(Default)]
pub struct ListBooksInput {
    pub author: Option<String>,
    pub genre: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug)]
pub struct BookPage {
    pub books: Vec<Book>,
    pub page: PageRequest,
    pub total: u64,
    pub total_pages: u64,
}

pub struct ListBooksUseCase<B>
where
    B: BookRepository,
{
    books: Arc<B>,
}

impl<B> ListBooksUseCase<B>
where
    B: BookRepository,
{
    pub fn new(books: Arc<B>) -> Self {
        Self { books }
    }

    pub async fn execute(&self, input: ListBooksInput) -> CatalogResult<BookPage> {
        let filter = BookFilter::new(input.author.as_deref(), input.genre.as_deref());

        let page = PageRequest::parse(
            input.page.as_deref(),
            input.limit.as_deref(),
            DEFAULT_BOOK_LIMIT,
        )
        .ok_or(CatalogError::InvalidPagination)?;

        let sort = BookSort::parse(input.sort.as_deref(), input.order.as_deref())
            .ok_or(CatalogError::InvalidSortField)?;

        let books = self.books.list(&filter, sort, page).await?;
        let total = self.books.count(&filter).await?;

        Ok(BookPage {
            books,
            page,
            total,
            total_pages: page.total_pages(total),
        })
    }
}

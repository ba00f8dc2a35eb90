//! Add Book Use Case

use std::sync::Arc;

use kernel::principal::CurrentUser;

use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::domain::value_object::book_draft::BookDraft;
use crate::error::CatalogResult;

/// Add book input, fields as received
#[derive(Default)]
pub struct AddBookInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

pub struct AddBookUseCase<B>
where
    B: BookRepository,
{
    books: Arc<B>,
}

impl<B> AddBookUseCase<B>
where
    B: BookRepository,
{
    pub fn new(books: Arc<B>) -> Self {
        Self { books }
    }

    pub async fn execute(&self, input: AddBookInput, caller: &CurrentUser) -> CatalogResult<Book> {
        let draft = BookDraft::parse(
            input.title.as_deref(),
            input.author.as_deref(),
            input.genre.as_deref(),
            input.description.as_deref(),
        )?;

        let book = Book::new(draft, caller.user_id);
        self.books.create(&book).await?;

        tracing::info!(
            book_id = %book.book_id,
            created_by = %book.created_by,
            title = %book.title,
            "Book added"
        );

        Ok(book)
    }
}

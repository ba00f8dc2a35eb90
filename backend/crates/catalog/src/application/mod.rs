//! Application Layer
//!
//! Use cases for books and reviews.

pub mod add_book;
pub mod delete_review;
pub mod get_book;
pub mod list_books;
pub mod search_books;
pub mod submit_review;
pub mod update_review;

// Re-exports
pub use add_book::{AddBookInput, AddBookUseCase};
pub use delete_review::DeleteReviewUseCase;
pub use get_book::{BookDetail, GetBookInput, GetBookUseCase};
pub use list_books::{BookPage, ListBooksInput, ListBooksUseCase};
pub use search_books::{SearchBooksInput, SearchBooksUseCase};
pub use submit_review::{SubmitReviewInput, SubmitReviewUseCase};
pub use update_review::{UpdateReviewInput, UpdateReviewUseCase};

//! Book Entity

use chrono::{DateTime, Utc};
use kernel::id::{BookId, UserId};

use crate::domain::value_object::book_draft::BookDraft;

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: Option<String>,
    /// The user who added the book
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new(draft: BookDraft, created_by: UserId) -> Self {
        let now = Utc::now();

        Self {
            book_id: BookId::new(),
            title: draft.title,
            author: draft.author,
            genre: draft.genre,
            description: draft.description,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

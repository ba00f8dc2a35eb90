//! Book Draft Value Object
//!
//! Validated input for a new book. Every field rule is checked and all
//! violations are reported together.

use kernel::validation::{ValidationError, Violations};

/// Maximum length of title, author and genre (in characters)
pub const BOOK_FIELD_MAX_LENGTH: usize = 15;

/// Maximum length of a description (in characters)
pub const DESCRIPTION_MAX_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: Option<String>,
}

impl BookDraft {
    /// Trim and validate raw fields
    pub fn parse(
        title: Option<&str>,
        author: Option<&str>,
        genre: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut v = Violations::new();

        let title = v.required_text(
            title,
            BOOK_FIELD_MAX_LENGTH,
            "Title is required",
            "Title cannot exceed 15 characters",
        );
        let author = v.required_text(
            author,
            BOOK_FIELD_MAX_LENGTH,
            "Author is required",
            "Author name cannot exceed 15 characters",
        );
        let genre = v.required_text(
            genre,
            BOOK_FIELD_MAX_LENGTH,
            "Genre is required",
            "Genre cannot exceed 15 characters",
        );
        let description = v.optional_text(
            description,
            DESCRIPTION_MAX_LENGTH,
            "Description cannot exceed 500 characters",
        );

        // A missing required field always records a violation
        v.finish()?;

        Ok(Self {
            title: title.unwrap_or_default(),
            author: author.unwrap_or_default(),
            genre: genre.unwrap_or_default(),
            description,
        })
    }
}

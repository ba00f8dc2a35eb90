//! Review Entity
//!
//! Lifecycle: created, edited any number of times by its author, optionally
//! deleted by its author. Each (user, book) pair has at most one review.

use chrono::{DateTime, Utc};
use derive_more::Display;
use kernel::id::{BookId, ReviewId, UserId};

use crate::domain::value_object::comment::Comment;
use crate::domain::value_object::rating::Rating;
use crate::domain::value_object::review_draft::{ReviewDraft, ReviewEdit};
use crate::error::{CatalogError, CatalogResult};

/// Owner-only operations on a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ReviewAction {
    #[display("update")]
    Update,
    #[display("delete")]
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: ReviewId,
    pub book_id: BookId,
    pub user_id: UserId,
    pub rating: Rating,
    pub comment: Option<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set on every edit
    pub edited_at: Option<DateTime<Utc>>,
}

/// A review together with its author's display name
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithReviewer {
    pub review: Review,
    pub reviewer_name: String,
}

impl Review {
    pub fn new(book_id: BookId, user_id: UserId, draft: ReviewDraft) -> Self {
        let now = Utc::now();

        Self {
            review_id: ReviewId::new(),
            book_id,
            user_id,
            rating: draft.rating,
            comment: draft.comment,
            created_at: now,
            updated_at: now,
            edited_at: None,
        }
    }

    /// Fails with 403 unless `user_id` wrote this review
    pub fn ensure_owned_by(&self, user_id: &UserId, action: ReviewAction) -> CatalogResult<()> {
        if &self.user_id == user_id {
            Ok(())
        } else {
            Err(CatalogError::NotOwner(action))
        }
    }

    /// Apply supplied fields and stamp the edit time
    pub fn apply(&mut self, edit: ReviewEdit) {
        if let Some(rating) = edit.rating {
            self.rating = rating;
        }
        if let Some(comment) = edit.comment {
            self.comment = comment;
        }

        let now = Utc::now();
        self.edited_at = Some(now);
        self.updated_at = now;
    }
}

//! Submit Review Use Case

use std::sync::Arc;

use kernel::id::BookId;
use kernel::principal::CurrentUser;
use serde_json::Value;

use crate::domain::entity::review::Review;
use crate::domain::repository::ReviewRepository;
use crate::domain::value_object::review_draft::ReviewDraft;
use crate::error::{CatalogError, CatalogResult};

#[derive(Default)]
pub struct SubmitReviewInput {
    pub book_id: String,
    pub rating: Option<Value>,
    pub comment: Option<String>,
}

pub struct SubmitReviewUseCase<R>
where
    R: ReviewRepository,
{
    reviews: Arc<R>,
}

impl<R> SubmitReviewUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(reviews: Arc<R>) -> Self {
        Self { reviews }
    }

    /// Storage enforces both the single review per user and book and the
    /// existence of the book
    pub async fn execute(
        &self,
        input: SubmitReviewInput,
        caller: &CurrentUser,
    ) -> CatalogResult<Review> {
        let draft = ReviewDraft::parse(input.rating.as_ref(), input.comment.as_deref())?;
        let book_id = BookId::parse(&input.book_id).ok_or(CatalogError::InvalidBookId)?;

        let review = Review::new(book_id, caller.user_id, draft);
        self.reviews.create(&review).await?;

        tracing::info!(
            review_id = %review.review_id,
            book_id = %review.book_id,
            user_id = %review.user_id,
            rating = review.rating.value(),
            "Review submitted"
        );

        Ok(review)
    }
}

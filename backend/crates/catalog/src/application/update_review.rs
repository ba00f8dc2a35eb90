//! Update Review Use Case
//!
//! Only the author may edit; absent fields are left as they are.

use std::sync::Arc;

use kernel::id::ReviewId;
use kernel::principal::CurrentUser;
use serde_json::Value;

use crate::domain::entity::review::{Review, ReviewAction};
use crate::domain::repository::ReviewRepository;
use crate::domain::value_object::review_draft::ReviewEdit;
use crate::error::{CatalogError, CatalogResult};

#[derive(Default)]
pub struct UpdateReviewInput {
    pub review_id: String,
    pub rating: Option<Value>,
    /// `Some(None)` clears the comment
    pub comment: Option<Option<String>>,
}

pub struct UpdateReviewUseCase<R>
where
    R: ReviewRepository,
{
    reviews: Arc<R>,
}

impl<R> UpdateReviewUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(reviews: Arc<R>) -> Self {
        Self { reviews }
    }

    pub async fn execute(
        &self,
        input: UpdateReviewInput,
        caller: &CurrentUser,
    ) -> CatalogResult<Review> {
        let review_id = ReviewId::parse(&input.review_id).ok_or(CatalogError::InvalidReviewId)?;

        let mut review = self
            .reviews
            .find_by_id(&review_id)
            .await?
            .ok_or(CatalogError::ReviewNotFound)?;

        review.ensure_owned_by(&caller.user_id, ReviewAction::Update)?;

        let edit = ReviewEdit::parse(
            input.rating.as_ref(),
            input.comment.as_ref().map(Option::as_deref),
        )?;
        review.apply(edit);
        self.reviews.update(&review).await?;

        tracing::info!(review_id = %review.review_id, user_id = %caller.user_id, "Review updated");

        Ok(review)
    }
}

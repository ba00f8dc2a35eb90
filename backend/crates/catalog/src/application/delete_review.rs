//! Delete Review Use Case

use std::sync::Arc;

use kernel::id::ReviewId;
use kernel::principal::CurrentUser;

use crate::domain::entity::review::ReviewAction;
use crate::domain::repository::ReviewRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct DeleteReviewUseCase<R>
where
    R: ReviewRepository,
{
    reviews: Arc<R>,
}

impl<R> DeleteReviewUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(reviews: Arc<R>) -> Self {
        Self { reviews }
    }

    pub async fn execute(&self, review_id: &str, caller: &CurrentUser) -> CatalogResult<()> {
        let review_id = ReviewId::parse(review_id).ok_or(CatalogError::InvalidReviewId)?;

        let review = self
            .reviews
            .find_by_id(&review_id)
            .await?
            .ok_or(CatalogError::ReviewNotFound)?;

        review.ensure_owned_by(&caller.user_id, ReviewAction::Delete)?;
        self.reviews.delete(&review_id).await?;

        tracing::info!(%review_id, user_id = %caller.user_id, "Review deleted");

        Ok(())
    }
}

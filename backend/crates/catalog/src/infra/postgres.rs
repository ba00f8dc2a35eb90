//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::{pg_code, pg_constraint, pg_error_code};
use kernel::id::{BookId, ReviewId, UserId};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::entity::{
    book::Book,
    review::{Review, ReviewWithReviewer},
};
use crate::domain::repository::{BookFilter, BookRepository, ReviewRepository};
use crate::domain::value_object::{
    comment::Comment, paging::PageRequest, rating::Rating, rating::RatingStats, sort::BookSort,
};
use crate::error::{CatalogError, CatalogResult};

/// PostgreSQL-backed book and review repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const BOOK_COLUMNS: &str =
    "book_id, title, author, genre, description, created_by, created_at, updated_at";

const REVIEW_COLUMNS: &str =
    "review_id, book_id, user_id, rating, comment, created_at, updated_at, edited_at";

/// Constraint names from the `reviews` table definition
const REVIEWS_USER_BOOK_KEY: &str = "reviews_user_book_key";
const REVIEWS_BOOK_FKEY: &str = "reviews_book_id_fkey";

/// Domain error for an integrity violation on review insert
fn review_violation(code: Option<&str>, constraint: Option<&str>) -> Option<CatalogError> {
    match (code?, constraint) {
        (pg_code::UNIQUE_VIOLATION, Some(REVIEWS_USER_BOOK_KEY)) => {
            Some(CatalogError::DuplicateReview)
        }
        (pg_code::FOREIGN_KEY_VIOLATION, Some(REVIEWS_BOOK_FKEY)) => {
            Some(CatalogError::BookNotFound)
        }
        _ => None,
    }
}

/// Escape LIKE metacharacters so user input matches literally
fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn contains_pattern(raw: &str) -> String {
    format!("%{}%", escape_like(raw))
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &BookFilter) {
    builder.push(" WHERE TRUE");
    if let Some(author) = &filter.author {
        builder
            .push(" AND author ILIKE ")
            .push_bind(contains_pattern(author))
            .push(r" ESCAPE '\'");
    }
    if let Some(genre) = &filter.genre {
        builder.push(" AND genre = ").push_bind(genre.clone());
    }
}

impl BookRepository for PgCatalogRepository {
    async fn create(&self, book: &Book) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO books (
                book_id,
                title,
                author,
                genre,
                description,
                created_by,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(book.book_id.as_uuid())
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.description.as_deref())
        .bind(book.created_by.as_uuid())
        .bind(book.created_at)
        .bind(book.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, book_id: &BookId) -> CatalogResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE book_id = $1"
        ))
        .bind(book_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BookRow::into_book))
    }

    async fn list(
        &self,
        filter: &BookFilter,
        sort: BookSort,
        page: PageRequest,
    ) -> CatalogResult<Vec<Book>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {BOOK_COLUMNS} FROM books"));
        push_filter(&mut builder, filter);

        // Column and keyword come from closed enums, never from the request.
        builder.push(format!(
            " ORDER BY {} {}, book_id {}",
            sort.field.column(),
            sort.order.keyword(),
            sort.order.keyword()
        ));
        builder
            .push(" LIMIT ")
            .push_bind(i64::from(page.limit))
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows = builder
            .build_query_as::<BookRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(BookRow::into_book).collect())
    }

    async fn count(&self, filter: &BookFilter) -> CatalogResult<u64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM books");
        push_filter(&mut builder, filter);

        let count: i64 = builder.build_query_scalar::<i64>().fetch_one(&self.pool).await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn search(&self, query: &str, limit: u32) -> CatalogResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            SELECT {BOOK_COLUMNS} FROM books
            WHERE title ILIKE $1 ESCAPE '\' OR author ILIKE $1 ESCAPE '\'
            ORDER BY created_at DESC, book_id DESC
            LIMIT $2
            "#
        ))
        .bind(contains_pattern(query))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookRow::into_book).collect())
    }
}

impl ReviewRepository for PgCatalogRepository {
    async fn create(&self, review: &Review) -> CatalogResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO reviews (
                review_id,
                book_id,
                user_id,
                rating,
                comment,
                created_at,
                updated_at,
                edited_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(review.review_id.as_uuid())
        .bind(review.book_id.as_uuid())
        .bind(review.user_id.as_uuid())
        .bind(review.rating.value())
        .bind(review.comment.as_ref().map(Comment::as_str))
        .bind(review.created_at)
        .bind(review.updated_at)
        .bind(review.edited_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                let code = pg_error_code(&e);
                let constraint = pg_constraint(&e);
                Err(review_violation(code.as_deref(), constraint.as_deref())
                    .unwrap_or_else(|| e.into()))
            }
        }
    }

    async fn find_by_id(&self, review_id: &ReviewId) -> CatalogResult<Option<Review>> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE review_id = $1"
        ))
        .bind(review_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ReviewRow::into_review))
    }

    async fn update(&self, review: &Review) -> CatalogResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE reviews
            SET rating = $2, comment = $3, updated_at = $4, edited_at = $5
            WHERE review_id = $1
            "#,
        )
        .bind(review.review_id.as_uuid())
        .bind(review.rating.value())
        .bind(review.comment.as_ref().map(Comment::as_str))
        .bind(review.updated_at)
        .bind(review.edited_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::ReviewNotFound);
        }
        Ok(())
    }

    async fn delete(&self, review_id: &ReviewId) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(review_id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::ReviewNotFound);
        }
        Ok(())
    }

    async fn list_for_book(
        &self,
        book_id: &BookId,
        page: PageRequest,
    ) -> CatalogResult<Vec<ReviewWithReviewer>> {
        let rows = sqlx::query_as::<_, ReviewWithReviewerRow>(
            r#"
            SELECT
                r.review_id,
                r.book_id,
                r.user_id,
                r.rating,
                r.comment,
                r.created_at,
                r.updated_at,
                r.edited_at,
                u.name AS reviewer_name
            FROM reviews r
            JOIN users u ON u.user_id = r.user_id
            WHERE r.book_id = $1
            ORDER BY r.created_at DESC, r.review_id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(book_id.as_uuid())
        .bind(i64::from(page.limit))
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(ReviewWithReviewerRow::into_review_with_reviewer)
            .collect())
    }

    async fn stats_for_book(&self, book_id: &BookId) -> CatalogResult<RatingStats> {
        let (count, average): (i64, Option<f64>) = sqlx::query_as(
            "SELECT COUNT(*), AVG(rating) FROM reviews WHERE book_id = $1",
        )
        .bind(book_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(RatingStats {
            count: u64::try_from(count).unwrap_or_default(),
            average,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    book_id: Uuid,
    title: String,
    author: String,
    genre: String,
    description: Option<String>,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookRow {
    fn into_book(self) -> Book {
        Book {
            book_id: BookId::from_uuid(self.book_id),
            title: self.title,
            author: self.author,
            genre: self.genre,
            description: self.description,
            created_by: UserId::from_uuid(self.created_by),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    review_id: Uuid,
    book_id: Uuid,
    user_id: Uuid,
    rating: f64,
    comment: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    edited_at: Option<DateTime<Utc>>,
}

impl ReviewRow {
    fn into_review(self) -> Review {
        Review {
            review_id: ReviewId::from_uuid(self.review_id),
            book_id: BookId::from_uuid(self.book_id),
            user_id: UserId::from_uuid(self.user_id),
            rating: Rating::from_db(self.rating),
            comment: self.comment.map(Comment::from_db),
            created_at: self.created_at,
            updated_at: self.updated_at,
            edited_at: self.edited_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewWithReviewerRow {
    #[sqlx(flatten)]
    review: ReviewRow,
    reviewer_name: String,
}

impl ReviewWithReviewerRow {
    fn into_review_with_reviewer(self) -> ReviewWithReviewer {
        ReviewWithReviewer {
            review: self.review.into_review(),
            reviewer_name: self.reviewer_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("Tolkien"), "Tolkien");
        assert_eq!(escape_like("100%"), r"100\%");
        assert_eq!(escape_like("a_b"), r"a\_b");
        assert_eq!(escape_like(r"c:\x"), r"c:\\x");
        assert_eq!(contains_pattern("Her"), "%Her%");
    }

    #[test]
    fn test_review_violation_matches_constraint() {
        assert!(matches!(
            review_violation(Some("23505"), Some("reviews_user_book_key")),
            Some(CatalogError::DuplicateReview)
        ));
        assert!(matches!(
            review_violation(Some("23503"), Some("reviews_book_id_fkey")),
            Some(CatalogError::BookNotFound)
        ));
        assert!(review_violation(Some("23503"), Some("reviews_user_id_fkey")).is_none());
        assert!(review_violation(Some("23505"), Some("reviews_pkey")).is_none());
        assert!(review_violation(None, None).is_none());
    }
}

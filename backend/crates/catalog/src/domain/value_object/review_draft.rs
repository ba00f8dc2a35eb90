//! Review input value objects
//!
//! Rating and comment rules are checked together, so a request with both a
//! bad rating and an oversized comment gets both messages.

use kernel::validation::{ValidationError, Violations};
use serde_json::Value;

use crate::domain::value_object::comment::Comment;
use crate::domain::value_object::rating::{RATING_MESSAGE, Rating};

/// Validated input for a new review
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub rating: Rating,
    pub comment: Option<Comment>,
}

impl ReviewDraft {
    pub fn parse(rating: Option<&Value>, comment: Option<&str>) -> Result<Self, ValidationError> {
        let mut v = Violations::new();

        let rating = rating.and_then(Rating::from_json);
        if rating.is_none() {
            v.push(RATING_MESSAGE);
        }
        let comment = Comment::parse(comment, &mut v);

        v.finish()?;

        let rating = rating.ok_or_else(|| ValidationError::single(RATING_MESSAGE))?;
        Ok(Self { rating, comment })
    }
}

/// Validated partial update of a review
///
/// `comment: Some(None)` clears the comment; `None` leaves it untouched.
/// A supplied rating must be valid, JSON `null` included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewEdit {
    pub rating: Option<Rating>,
    pub comment: Option<Option<Comment>>,
}

impl ReviewEdit {
    /// `comment` is `Some(None)` for an explicit `null`, which clears it
    pub fn parse(
        rating: Option<&Value>,
        comment: Option<Option<&str>>,
    ) -> Result<Self, ValidationError> {
        let mut v = Violations::new();

        let rating = match rating {
            None => None,
            Some(value) => {
                let parsed = Rating::from_json(value);
                if parsed.is_none() {
                    v.push(RATING_MESSAGE);
                }
                parsed
            }
        };
        let comment = comment.map(|raw| Comment::parse(raw, &mut v));

        v.finish()?;
        Ok(Self { rating, comment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draft_requires_rating() {
        let err = ReviewDraft::parse(None, Some("Great")).unwrap_err();
        assert_eq!(err.to_string(), RATING_MESSAGE);

        let err = ReviewDraft::parse(Some(&json!("5")), None).unwrap_err();
        assert_eq!(err.to_string(), RATING_MESSAGE);
    }

    #[test]
    fn test_draft_reports_both_violations() {
        let long = "x".repeat(501);
        let err = ReviewDraft::parse(Some(&json!(9)), Some(&long)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Rating must be a number between 1 and 5, Comment cannot exceed 500 characters"
        );
    }

    #[test]
    fn test_draft_ok() {
        let draft = ReviewDraft::parse(Some(&json!(4)), Some(" Good ")).unwrap();
        assert_eq!(draft.rating.value(), 4.0);
        assert_eq!(draft.comment.unwrap().as_str(), "Good");
    }

    #[test]
    fn test_edit_fields_are_optional() {
        assert_eq!(ReviewEdit::parse(None, None).unwrap(), ReviewEdit::default());

        let edit = ReviewEdit::parse(None, Some(Some(""))).unwrap();
        assert_eq!(edit.comment, Some(None));

        let edit = ReviewEdit::parse(None, Some(None)).unwrap();
        assert_eq!(edit.comment, Some(None));
        assert_eq!(edit.rating, None);

        let err = ReviewEdit::parse(Some(&json!(0)), None).unwrap_err();
        assert_eq!(err.to_string(), RATING_MESSAGE);
    }

    #[test]
    fn test_edit_rejects_null_rating() {
        let err = ReviewEdit::parse(Some(&json!(null)), None).unwrap_err();
        assert_eq!(err.to_string(), RATING_MESSAGE);
    }
}

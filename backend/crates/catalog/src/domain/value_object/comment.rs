//! Comment Value Object

use derive_more::Display;
use kernel::validation::Violations;

/// Maximum comment length (in characters); the `reviews` table CHECK uses the
/// same bound
pub const COMMENT_MAX_LENGTH: usize = 500;

pub const COMMENT_MESSAGE: &str = "Comment cannot exceed 500 characters";

/// Trimmed, non-blank review comment
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct Comment(String);

impl Comment {
    /// Blank input yields `None` without a violation
    pub fn parse(raw: Option<&str>, v: &mut Violations) -> Option<Self> {
        v.optional_text(raw, COMMENT_MAX_LENGTH, COMMENT_MESSAGE)
            .map(Self)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(comment: impl Into<String>) -> Self {
        Self(comment.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

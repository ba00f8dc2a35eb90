//! Input validation rules
//!
//! Handlers validate request fields through [`Violations`], which collects
//! every failed rule instead of stopping at the first one. The result is a
//! single [`ValidationError`] whose message lists all violations joined by
//! `", "`, rendered as a 400.

use thiserror::Error;

use crate::error::app_error::AppError;

/// One or more failed validation rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.join(", "))]
pub struct ValidationError(Vec<String>);

impl ValidationError {
    /// A single failed rule
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

/// Collector of failed rules
///
/// ```rust
/// use kernel::validation::Violations;
///
/// let mut v = Violations::new();
/// let title = v.required_text(Some("  "), 15, "Title is required", "Title cannot exceed 15 characters");
/// let author = v.required_text(Some("Herbert"), 15, "Author is required", "Author cannot exceed 15 characters");
/// assert!(title.is_none());
/// assert_eq!(author.as_deref(), Some("Herbert"));
/// assert_eq!(v.finish().unwrap_err().to_string(), "Title is required");
/// ```
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Required text field: trimmed, non-empty, at most `max` characters
    ///
    /// Returns the trimmed value when valid, records a violation otherwise.
    pub fn required_text(
        &mut self,
        value: Option<&str>,
        max: usize,
        missing: &str,
        too_long: &str,
    ) -> Option<String> {
        match value.map(str::trim) {
            None | Some("") => {
                self.push(missing);
                None
            }
            Some(v) if v.chars().count() > max => {
                self.push(too_long);
                None
            }
            Some(v) => Some(v.to_string()),
        }
    }

    /// Optional text field: trimmed, at most `max` characters
    ///
    /// Blank input is treated as absent.
    pub fn optional_text(
        &mut self,
        value: Option<&str>,
        max: usize,
        too_long: &str,
    ) -> Option<String> {
        match value.map(str::trim) {
            None | Some("") => None,
            Some(v) if v.chars().count() > max => {
                self.push(too_long);
                None
            }
            Some(v) => Some(v.to_string()),
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_every_violation() {
        let mut v = Violations::new();
        v.required_text(
            Some("Sixteen chars!!!"),
            15,
            "Title is required",
            "Title cannot exceed 15 characters",
        );
        v.required_text(None, 15, "Author is required", "Author cannot exceed 15 characters");

        let err = v.finish().unwrap_err();
        assert_eq!(err.messages().len(), 2);
        assert_eq!(
            err.to_string(),
            "Title cannot exceed 15 characters, Author is required"
        );
    }

    #[test]
    fn test_required_text_trims() {
        let mut v = Violations::new();
        let value = v.required_text(Some("  Dune  "), 15, "missing", "too long");
        assert_eq!(value.as_deref(), Some("Dune"));
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut v = Violations::new();
        let accented = "é".repeat(15);
        let value = v.required_text(Some(&accented), 15, "missing", "too long");
        assert!(value.is_some());
        assert!(v.is_empty());
    }

    #[test]
    fn test_optional_text() {
        let mut v = Violations::new();
        assert_eq!(v.optional_text(Some("   "), 5, "too long"), None);
        assert_eq!(v.optional_text(None, 5, "too long"), None);
        assert_eq!(v.optional_text(Some(" ok "), 5, "too long").as_deref(), Some("ok"));
        assert_eq!(v.optional_text(Some("way too long"), 5, "too long"), None);
        assert_eq!(v.finish().unwrap_err().to_string(), "too long");
    }

    #[test]
    fn test_into_app_error() {
        let mut v = Violations::new();
        v.push("Genre is required");
        let app: AppError = v.finish().unwrap_err().into();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.message(), "Genre is required");
    }
}

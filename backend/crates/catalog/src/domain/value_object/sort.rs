//! Book listing order

/// Whitelisted sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Author,
    Genre,
}

impl BookSortField {
    /// Parse the wire name; unknown names are rejected
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "genre" => Some(Self::Genre),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// `"desc"` sorts descending, anything else ascending
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "desc" { Self::Desc } else { Self::Asc }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookSort {
    pub field: BookSortField,
    pub order: SortOrder,
}

impl BookSort {
    /// Absent values fall back to `createdAt` / `desc`
    pub fn parse(field: Option<&str>, order: Option<&str>) -> Option<Self> {
        let field = match field {
            None => BookSortField::default(),
            Some(raw) => BookSortField::parse(raw)?,
        };
        let order = order.map(SortOrder::parse).unwrap_or_default();
        Some(Self { field, order })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_newest_first() {
        let sort = BookSort::parse(None, None).unwrap();
        assert_eq!(sort.field.column(), "created_at");
        assert_eq!(sort.order.keyword(), "DESC");
    }

    #[test]
    fn test_whitelist() {
        assert_eq!(BookSort::parse(Some("title"), None).unwrap().field, BookSortField::Title);
        assert_eq!(BookSort::parse(Some("password_hash"), None), None);
        assert_eq!(BookSort::parse(Some("title; DROP TABLE books"), None), None);
    }

    #[test]
    fn test_order_anything_but_desc_is_ascending() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
    }
}

use serde::{Deserialize, Serialize};

/// Search criteria for catalog queries
///
/// `author: None` means "the caller did not ask about the author" and is
/// deliberately not the same thing as an empty author string - absence
/// removes the author weight from scoring entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookQuery {
    pub title: String,
    pub author: Option<String>,
    /// Raw identifier as typed/scanned; validated by the search service
    /// before any identifier lookup is attempted.
    pub isbn: Option<String>,
    pub limit: usize,
}

impl BookQuery {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            isbn: None,
            limit: 20,
        }
    }

    pub fn by_isbn(isbn: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            author: None,
            isbn: Some(isbn.into()),
            limit: 20,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() && self.isbn.is_none() {
            return Err("Search query needs a title or an ISBN".to_string());
        }

        if self.limit == 0 || self.limit > 100 {
            return Err("Limit must be between 1 and 100".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_query_is_valid() {
        assert!(BookQuery::new("ぐりとぐら").validate().is_ok());
    }

    #[test]
    fn test_isbn_only_query_is_valid() {
        assert!(BookQuery::by_isbn("9784834000825").validate().is_ok());
    }

    #[test]
    fn test_blank_query_is_rejected() {
        assert!(BookQuery::new("   ").validate().is_err());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(BookQuery::new("ぐり").with_limit(0).validate().is_err());
        assert!(BookQuery::new("ぐり").with_limit(101).validate().is_err());
        assert!(BookQuery::new("ぐり").with_limit(100).validate().is_ok());
    }

    #[test]
    fn test_builder_methods_chain() {
        let query = BookQuery::new("ぐりとぐら")
            .with_author("なかがわりえこ")
            .with_isbn("978-4-8340-0082-5")
            .with_limit(5);

        assert_eq!(query.author.as_deref(), Some("なかがわりえこ"));
        assert_eq!(query.isbn.as_deref(), Some("978-4-8340-0082-5"));
        assert_eq!(query.limit, 5);
    }
}

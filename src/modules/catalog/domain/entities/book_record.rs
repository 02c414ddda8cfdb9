use serde::{Deserialize, Serialize};

/// A catalog record, either from the external bibliographic gateway or the
/// local book list
///
/// Fields arrive as raw strings; nothing here is normalized or validated.
/// The search processor normalizes on the fly and the identifier validator
/// decides whether `isbn` is usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    /// Organization-assigned shelf tag, e.g. "あ001".
    pub management_number: Option<String>,
}

impl BookRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            publisher: None,
            isbn: None,
            management_number: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_management_number(mut self, number: impl Into<String>) -> Self {
        self.management_number = Some(number.into());
        self
    }
}

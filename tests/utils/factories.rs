/// Test data factories using builder pattern
///
/// Provides convenient methods to create catalog records with sensible
/// defaults
use ehondana::modules::catalog::BookRecord;

pub struct BookFactory {
    record: BookRecord,
}

impl BookFactory {
    /// A record with only a title
    pub fn minimal(title: &str) -> Self {
        Self {
            record: BookRecord::new(title),
        }
    }

    /// A fully populated record for a well-known picture book
    pub fn guri_to_gura() -> Self {
        Self::minimal("ぐりとぐら")
            .with_author("なかがわりえこ")
            .with_publisher("福音館書店")
            .with_isbn("9784834000825")
            .with_management_number("か001")
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.record.author = Some(author.to_string());
        self
    }

    pub fn with_publisher(mut self, publisher: &str) -> Self {
        self.record.publisher = Some(publisher.to_string());
        self
    }

    pub fn with_isbn(mut self, isbn: &str) -> Self {
        self.record.isbn = Some(isbn.to_string());
        self
    }

    pub fn with_management_number(mut self, number: &str) -> Self {
        self.record.management_number = Some(number.to_string());
        self
    }

    pub fn build(self) -> BookRecord {
        self.record
    }
}

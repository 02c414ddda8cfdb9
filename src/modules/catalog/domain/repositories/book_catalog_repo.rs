use async_trait::async_trait;

use crate::modules::catalog::domain::entities::BookRecord;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::shared::errors::AppResult;

/// Repository interface for the external bibliographic catalog
///
/// This defines the contract for fetching candidate records; the network
/// transport behind it is not part of this subsystem. `find_by_isbn` is
/// only ever called with a checksum-validated identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCatalogRepository: Send + Sync {
    /// Look up records by exact identifier
    async fn find_by_isbn(&self, isbn: &Isbn) -> AppResult<Vec<BookRecord>>;

    /// Free-text title search returning raw, unranked candidates
    async fn search_books(&self, title: &str, limit: usize) -> AppResult<Vec<BookRecord>>;
}

pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::BookRecord;
pub use services::{BookSearchService, KanaClassifier, ShelfSectionService};
pub use value_objects::{BookQuery, Isbn, KanaGroup, ManagementSortKey};

pub mod book_search_service;
pub mod kana_classifier;
pub mod search_processor;
pub mod shelf_section_service;

pub use book_search_service::BookSearchService;
pub use kana_classifier::KanaClassifier;
pub use shelf_section_service::{ShelfSection, ShelfSectionService, ShelfSortMode};

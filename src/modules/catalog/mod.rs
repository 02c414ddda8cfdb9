pub mod domain;

// Re-exports for easy external access - only export what's actually used
pub use domain::entities::BookRecord;
pub use domain::repositories::BookCatalogRepository;
pub use domain::services::search_processor::{
    MatchScorer, NormalizeMode, RankingPipeline, ScoredBook, ScoringConfig, TextNormalizer,
};
pub use domain::services::{
    BookSearchService, KanaClassifier, ShelfSection, ShelfSectionService, ShelfSortMode,
};
pub use domain::value_objects::{BookQuery, Isbn, IsbnVariant, KanaGroup, ManagementSortKey};

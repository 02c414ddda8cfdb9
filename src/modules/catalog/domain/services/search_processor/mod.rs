/// Search processor module providing the configurable, testable components
/// behind catalog search: text canonicalization, relevance scoring, and
/// candidate ranking.
///
/// # Architecture
///
/// - **Pipeline Pattern**: `TextNormalizer` composes small transformations
///   parameterized by `NormalizeMode`
/// - **Configuration Pattern**: `ScoringConfig` externalizes weights and
///   thresholds
/// - **Metrics Pattern**: `PipelineMetrics` for observability
///
/// Every component here is a pure function over immutable inputs: no
/// shared state, no I/O, safe to call concurrently without
/// synchronization.
pub mod config;
pub mod match_scorer;
pub mod metrics;
pub mod ranking;
pub mod text_normalizer;

// Re-export main types
pub use config::{ScoringConfig, ScoringConfigBuilder};
pub use match_scorer::MatchScorer;
pub use metrics::{MetricsBuilder, PipelineMetrics, StageTimer};
pub use ranking::{RankingPipeline, ScoredBook};
pub use text_normalizer::{NormalizeMode, TextNormalizer, Transformation};

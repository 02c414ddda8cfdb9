use serde::Serialize;

use crate::modules::catalog::domain::entities::BookRecord;
use crate::modules::catalog::domain::value_objects::BookQuery;
use crate::shared::errors::AppResult;

use super::config::ScoringConfig;
use super::match_scorer::MatchScorer;

/// A candidate record paired with its relevance score
#[derive(Debug, Clone, Serialize)]
pub struct ScoredBook {
    pub record: BookRecord,
    pub score: f64,
}

/// Orders a candidate set by relevance to a query
///
/// Scores every candidate with [`MatchScorer`] and sorts by descending
/// score. The sort is stable, so candidates with equal scores keep their
/// input order - no secondary key is imposed.
pub struct RankingPipeline {
    scorer: MatchScorer,
}

impl RankingPipeline {
    pub fn new() -> Self {
        Self {
            scorer: MatchScorer::new(),
        }
    }

    pub fn with_config(config: ScoringConfig) -> AppResult<Self> {
        Ok(Self {
            scorer: MatchScorer::with_config(config)?,
        })
    }

    pub fn with_scorer(scorer: MatchScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    /// Rank candidates by descending relevance. Empty input yields an
    /// empty result.
    pub fn rank(&self, query: &BookQuery, candidates: Vec<BookRecord>) -> Vec<ScoredBook> {
        let mut scored: Vec<ScoredBook> = candidates
            .into_iter()
            .map(|record| ScoredBook {
                score: self.scorer.score(query, &record),
                record,
            })
            .collect();

        // Scores live in [0, 1], so total_cmp is a plain descending order;
        // Vec::sort_by is stable and preserves ties in input order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        log::debug!(
            "RANKING: ordered {} candidates for '{}'",
            scored.len(),
            query.title
        );

        scored
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_descending_score() {
        let pipeline = RankingPipeline::new();
        let query = BookQuery::new("ぐりとぐら");

        let candidates = vec![
            BookRecord::new("はらぺこあおむし"),
            BookRecord::new("ぐりとぐら"),
            BookRecord::new("ぐりとぐらのおきゃくさま"),
        ];

        let ranked = pipeline.rank(&query, candidates);

        assert_eq!(ranked[0].record.title, "ぐりとぐら");
        assert_eq!(ranked[1].record.title, "ぐりとぐらのおきゃくさま");
        assert_eq!(ranked[2].record.title, "はらぺこあおむし");

        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let pipeline = RankingPipeline::new();
        let query = BookQuery::new("ぐりとぐら");

        // Identical titles score identically; distinct ISBNs identify them
        let candidates = vec![
            BookRecord::new("ぐりとぐら").with_isbn("first"),
            BookRecord::new("ぐりとぐら").with_isbn("second"),
        ];

        let ranked = pipeline.rank(&query, candidates);

        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].record.isbn.as_deref(), Some("first"));
        assert_eq!(ranked[1].record.isbn.as_deref(), Some("second"));
    }

    #[test]
    fn test_empty_candidate_list_yields_empty_result() {
        let pipeline = RankingPipeline::new();
        let ranked = pipeline.rank(&BookQuery::new("ぐりとぐら"), vec![]);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_scores_are_attached_unchanged() {
        let pipeline = RankingPipeline::new();
        let query = BookQuery::new("ぐりとぐら");
        let record = BookRecord::new("ぐりとぐらのおきゃくさま");

        let direct = pipeline.scorer().score(&query, &record);
        let ranked = pipeline.rank(&query, vec![record]);

        assert_eq!(ranked[0].score, direct);
    }
}

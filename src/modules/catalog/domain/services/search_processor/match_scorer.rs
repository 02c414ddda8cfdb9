use strsim::normalized_levenshtein;

use crate::modules::catalog::domain::entities::BookRecord;
use crate::modules::catalog::domain::value_objects::BookQuery;
use crate::shared::errors::{AppError, AppResult};

use super::config::ScoringConfig;
use super::text_normalizer::TextNormalizer;

/// Score for an exact normalized match.
const EXACT_SCORE: f64 = 1.0;
/// Score when the candidate title starts with the query.
const PREFIX_SCORE: f64 = 0.9;
/// Score when the candidate title contains the query.
const CONTAINS_SCORE: f64 = 0.8;
/// Score when the query contains the candidate title.
const CONTAINED_SCORE: f64 = 0.7;
/// Score when either author string contains the other.
const AUTHOR_CONTAINS_SCORE: f64 = 0.8;

/// Computes a bounded relevance score for a candidate record against a
/// query
///
/// The score is pure: a function of the query and the candidate's
/// title/author fields only, always within [0.0, 1.0], and reproducible.
/// Titles are compared in title mode (space-free), authors in author mode
/// (credit suffixes stripped); `normalized_levenshtein` supplies the fuzzy
/// fallback as 1 - distance/max(len) over Unicode scalar values.
pub struct MatchScorer {
    config: ScoringConfig,
    title_normalizer: TextNormalizer,
    author_normalizer: TextNormalizer,
}

impl MatchScorer {
    /// Create a scorer with default configuration
    pub fn new() -> Self {
        Self::from_parts(ScoringConfig::new())
    }

    /// Create a scorer with custom configuration
    pub fn with_config(config: ScoringConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::ValidationError)?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: ScoringConfig) -> Self {
        Self {
            config,
            title_normalizer: TextNormalizer::title(),
            author_normalizer: TextNormalizer::author(),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Blend the title and author terms.
    ///
    /// A weight joins the denominator only when its term was computed: a
    /// query title that normalizes to empty contributes neither weight nor
    /// score, and the author weight participates only when the query
    /// carries a non-empty author - regardless of the term's value.
    pub fn score(&self, query: &BookQuery, candidate: &BookRecord) -> f64 {
        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;

        let query_title = self.title_normalizer.normalize(&query.title);
        if !query_title.is_empty() {
            let candidate_title = self.title_normalizer.normalize(&candidate.title);
            let term = self.title_term(&query_title, &candidate_title);
            log::trace!(
                "title term {:.3} for '{}' vs '{}'",
                term,
                query_title,
                candidate_title
            );
            weighted_sum += term * self.config.title_weight;
            weight_sum += self.config.title_weight;
        }

        if let Some(author) = query.author.as_deref() {
            let query_author = self.author_normalizer.normalize(author);
            if !query_author.is_empty() {
                let candidate_author = candidate
                    .author
                    .as_deref()
                    .map(|a| self.author_normalizer.normalize(a))
                    .unwrap_or_default();
                let term = self.author_term(&query_author, &candidate_author);
                log::trace!(
                    "author term {:.3} for '{}' vs '{}'",
                    term,
                    query_author,
                    candidate_author
                );
                weighted_sum += term * self.config.author_weight;
                weight_sum += self.config.author_weight;
            }
        }

        if weight_sum == 0.0 {
            0.0
        } else {
            weighted_sum / weight_sum
        }
    }

    /// Tiered title comparison over normalized strings.
    ///
    /// Containment tiers require a non-empty candidate: `contains("")` is
    /// vacuously true and must not award 0.7 to a blank title.
    fn title_term(&self, query: &str, candidate: &str) -> f64 {
        if candidate == query {
            return EXACT_SCORE;
        }

        if !candidate.is_empty() {
            if candidate.starts_with(query) {
                return PREFIX_SCORE;
            }
            if candidate.contains(query) {
                return CONTAINS_SCORE;
            }
            if query.contains(candidate) {
                return CONTAINED_SCORE;
            }
        }

        let similarity = normalized_levenshtein(query, candidate);
        if similarity >= self.config.title_similarity_floor {
            similarity * self.config.title_similarity_damping
        } else {
            0.0
        }
    }

    /// Tiered author comparison over normalized strings.
    fn author_term(&self, query: &str, candidate: &str) -> f64 {
        if candidate == query {
            return EXACT_SCORE;
        }

        if !candidate.is_empty() && (candidate.contains(query) || query.contains(candidate)) {
            return AUTHOR_CONTAINS_SCORE;
        }

        let similarity = normalized_levenshtein(query, candidate);
        if similarity >= self.config.author_similarity_floor {
            similarity * self.config.author_similarity_damping
        } else {
            0.0
        }
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

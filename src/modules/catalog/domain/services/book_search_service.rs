use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::catalog::domain::entities::BookRecord;
use crate::modules::catalog::domain::repositories::BookCatalogRepository;
use crate::modules::catalog::domain::services::search_processor::{
    MetricsBuilder, RankingPipeline, ScoredBook, ScoringConfig, StageTimer,
};
use crate::modules::catalog::domain::value_objects::{BookQuery, Isbn};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

/// Catalog search orchestration
///
/// Runs the two-stage flow against the external catalog gateway:
///
/// 1. If the query carries an ISBN that passes checksum validation, fetch
///    exact-identifier matches first. An invalid ISBN is "no identifier
///    available", not an error - the stage is simply skipped.
/// 2. Rank the title-search candidates with the scoring pipeline,
///    dropping any record already found by identifier.
///
/// Identifier matches come back first with score 1.0, followed by ranked
/// candidates in descending relevance.
pub struct BookSearchService {
    catalog_repo: Arc<dyn BookCatalogRepository>,
    ranking: RankingPipeline,
}

impl BookSearchService {
    pub fn new(catalog_repo: Arc<dyn BookCatalogRepository>) -> Self {
        Self {
            catalog_repo,
            ranking: RankingPipeline::new(),
        }
    }

    pub fn with_config(
        catalog_repo: Arc<dyn BookCatalogRepository>,
        config: ScoringConfig,
    ) -> AppResult<Self> {
        Ok(Self {
            catalog_repo,
            ranking: RankingPipeline::with_config(config)?,
        })
    }

    pub async fn search(&self, query: &BookQuery) -> AppResult<Vec<ScoredBook>> {
        query.validate().map_err(AppError::ValidationError)?;

        let mut metrics = MetricsBuilder::new();
        metrics.start_pipeline();

        // Stage 1: identifier lookup, gated on checksum validity
        let timer = StageTimer::start("IdentifierLookup");
        let exact = match query.isbn.as_deref().map(Isbn::parse) {
            Some(Some(isbn)) => {
                let hits = self.catalog_repo.find_by_isbn(&isbn).await?;
                log::info!("SEARCH: {} identifier hits for {}", hits.len(), isbn);
                hits
            }
            Some(None) => {
                log::debug!("SEARCH: ignoring invalid isbn in query");
                Vec::new()
            }
            None => Vec::new(),
        };
        timer.stop(&mut metrics);
        metrics.identifier_hits(exact.len());

        // Stage 2: rank title-search candidates, minus identifier hits
        let timer = StageTimer::start("Ranking");
        let ranked = if query.title.trim().is_empty() {
            Vec::new()
        } else {
            let candidates = self
                .catalog_repo
                .search_books(&query.title, query.limit)
                .await?;
            metrics.input_count(exact.len() + candidates.len());

            let known: HashSet<String> = exact
                .iter()
                .filter_map(|r| r.isbn.as_deref())
                .map(Isbn::normalize)
                .collect();
            let candidates: Vec<BookRecord> = candidates
                .into_iter()
                .filter(|c| match c.isbn.as_deref() {
                    Some(isbn) => !known.contains(&Isbn::normalize(isbn)),
                    None => true,
                })
                .collect();

            self.ranking.rank(query, candidates)
        };
        timer.stop(&mut metrics);

        let mut results: Vec<ScoredBook> = exact
            .into_iter()
            .map(|record| ScoredBook { record, score: 1.0 })
            .collect();
        results.extend(ranked);
        results.truncate(query.limit);

        metrics.output_count(results.len());
        let metrics = metrics.finish();
        LogContext::search_operation(&query.title, Some(metrics.output_count));
        log::debug!("{}", metrics.report());

        Ok(results)
    }
}

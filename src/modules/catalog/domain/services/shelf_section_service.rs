use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::entities::BookRecord;
use crate::modules::catalog::domain::services::kana_classifier::KanaClassifier;
use crate::modules::catalog::domain::services::search_processor::TextNormalizer;
use crate::modules::catalog::domain::value_objects::{KanaGroup, ManagementSortKey};

/// How books are ordered inside a shelf section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShelfSortMode {
    /// Lexicographic on the normalized title
    ByTitle,
    /// By management-number key; records without a number go last
    ByManagementNumber,
}

/// One displayed shelf section: a kana group and its books, in order
#[derive(Debug, Clone, Serialize)]
pub struct ShelfSection {
    pub group: KanaGroup,
    pub books: Vec<BookRecord>,
}

/// Builds the sectioned shelf view for the display layer
///
/// Filters the in-memory record list by normalized-title containment,
/// groups by kana row, orders sections by group rank, and sorts each
/// section by the requested mode. Sections that end up empty are omitted.
pub struct ShelfSectionService {
    classifier: KanaClassifier,
    title_normalizer: TextNormalizer,
}

impl ShelfSectionService {
    pub fn new() -> Self {
        Self {
            classifier: KanaClassifier::new(),
            title_normalizer: TextNormalizer::title(),
        }
    }

    pub fn build_sections(
        &self,
        books: &[BookRecord],
        filter: Option<&str>,
        sort_mode: ShelfSortMode,
    ) -> Vec<ShelfSection> {
        let filter = filter
            .map(|f| self.title_normalizer.normalize(f))
            .unwrap_or_default();

        // BTreeMap keyed by KanaGroup iterates in display-rank order
        let mut grouped: BTreeMap<KanaGroup, Vec<BookRecord>> = BTreeMap::new();
        for book in books {
            if !filter.is_empty() {
                let title = self.title_normalizer.normalize(&book.title);
                if !title.contains(&filter) {
                    continue;
                }
            }

            grouped
                .entry(self.classifier.classify(&book.title))
                .or_default()
                .push(book.clone());
        }

        let sections: Vec<ShelfSection> = grouped
            .into_iter()
            .map(|(group, mut books)| {
                match sort_mode {
                    // sort_by_cached_key is stable, so equal keys keep
                    // their input order in both modes
                    ShelfSortMode::ByTitle => {
                        books.sort_by_cached_key(|b| self.title_normalizer.normalize(&b.title));
                    }
                    ShelfSortMode::ByManagementNumber => {
                        books.sort_by_cached_key(|b| {
                            ManagementSortKey::from_number(b.management_number.as_deref())
                        });
                    }
                }
                ShelfSection { group, books }
            })
            .collect();

        log::debug!(
            "SHELF: built {} sections from {} records",
            sections.len(),
            books.len()
        );

        sections
    }
}

impl Default for ShelfSectionService {
    fn default() -> Self {
        Self::new()
    }
}

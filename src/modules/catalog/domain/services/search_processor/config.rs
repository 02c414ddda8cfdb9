use serde::{Deserialize, Serialize};

/// Configuration for the match scorer
///
/// Externalizes the weights and similarity thresholds so scoring stays
/// tunable and testable instead of scattering magic numbers through the
/// scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the title term in the blended score (0.0 to 1.0)
    pub title_weight: f64,

    /// Weight of the author term in the blended score (0.0 to 1.0)
    pub author_weight: f64,

    /// Minimum Levenshtein similarity for a title to count at all
    pub title_similarity_floor: f64,

    /// Factor applied to a title similarity that passed the floor, keeping
    /// fuzzy matches below the containment tiers
    pub title_similarity_damping: f64,

    /// Minimum Levenshtein similarity for an author to count at all
    pub author_similarity_floor: f64,

    /// Factor applied to an author similarity that passed the floor
    pub author_similarity_damping: f64,
}

impl ScoringConfig {
    /// Production defaults: titles dominate the blend, fuzzy matches stay
    /// strictly below containment matches.
    pub fn new() -> Self {
        Self {
            title_weight: 0.7,
            author_weight: 0.3,
            title_similarity_floor: 0.5,
            title_similarity_damping: 0.6,
            author_similarity_floor: 0.6,
            author_similarity_damping: 0.7,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title_weight < 0.0 || self.author_weight < 0.0 {
            return Err("Scoring weights must be non-negative".to_string());
        }

        let weight_sum = self.title_weight + self.author_weight;
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(format!(
                "Scoring weights must sum to 1.0, got {}",
                weight_sum
            ));
        }

        for (name, value) in [
            ("title_similarity_floor", self.title_similarity_floor),
            ("author_similarity_floor", self.author_similarity_floor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be within [0.0, 1.0], got {}", name, value));
            }
        }

        for (name, value) in [
            ("title_similarity_damping", self.title_similarity_damping),
            ("author_similarity_damping", self.author_similarity_damping),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(format!("{} must be within (0.0, 1.0], got {}", name, value));
            }
        }

        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for ScoringConfig to make test setup easier
#[derive(Default)]
pub struct ScoringConfigBuilder {
    config: ScoringConfig,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::new(),
        }
    }

    pub fn title_weight(mut self, weight: f64) -> Self {
        self.config.title_weight = weight;
        self
    }

    pub fn author_weight(mut self, weight: f64) -> Self {
        self.config.author_weight = weight;
        self
    }

    pub fn title_similarity_floor(mut self, floor: f64) -> Self {
        self.config.title_similarity_floor = floor;
        self
    }

    pub fn title_similarity_damping(mut self, damping: f64) -> Self {
        self.config.title_similarity_damping = damping;
        self
    }

    pub fn author_similarity_floor(mut self, floor: f64) -> Self {
        self.config.author_similarity_floor = floor;
        self
    }

    pub fn author_similarity_damping(mut self, damping: f64) -> Self {
        self.config.author_similarity_damping = damping;
        self
    }

    pub fn build(self) -> Result<ScoringConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}

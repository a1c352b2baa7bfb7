use serde::{Deserialize, Serialize};

use crate::constants;

/// Recommendation pipeline configuration.
///
/// All fields default to the values the original ranking was tuned with;
/// partial config files only need to name the fields they override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Recent-positive-interaction window for the preference vector.
    pub positive_window: usize,
    /// Leading description words used as feature tokens.
    pub description_token_cap: usize,
    /// Hybrid weight for the content-based score.
    pub content_weight: f64,
    /// Hybrid weight for the collaborative score.
    pub collab_weight: f64,
    /// Base confidence for a collaborative hit (co-occurrence count 0).
    pub collab_base_confidence: f64,
    /// Ceiling applied to every reported confidence.
    pub confidence_cap: f64,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            positive_window: constants::DEFAULT_POSITIVE_WINDOW,
            description_token_cap: constants::DEFAULT_DESCRIPTION_TOKEN_CAP,
            content_weight: constants::DEFAULT_CONTENT_WEIGHT,
            collab_weight: constants::DEFAULT_COLLAB_WEIGHT,
            collab_base_confidence: constants::DEFAULT_COLLAB_BASE_CONFIDENCE,
            confidence_cap: constants::DEFAULT_CONFIDENCE_CAP,
        }
    }
}

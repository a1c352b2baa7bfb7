use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Place;
use crate::constants::MAX_HIGHLIGHTS;

/// Which recommender produced a result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Content,
    Collaborative,
    Hybrid,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Content => "content",
            Self::Collaborative => "collaborative",
            Self::Hybrid => "hybrid",
        };
        f.write_str(s)
    }
}

/// One ranked recommendation, ready for the transport layer to serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Catalog id of the recommended place.
    pub id: String,
    pub strategy: Strategy,
    /// "Name, State" display string.
    pub destination: String,
    /// Category of the place, or a strategy-specific fallback.
    pub title: String,
    pub description: String,
    /// Always within [0, 1].
    pub confidence: f64,
    /// Up to three short strings, drawn from the place's accommodations.
    pub highlights: Vec<String>,
}

impl Recommendation {
    /// Map a resolved place plus a score into the result shape.
    pub fn from_place(place: &Place, strategy: Strategy, title_fallback: &str, confidence: f64) -> Self {
        Self {
            id: place.id.clone(),
            strategy,
            destination: place.destination(),
            title: place
                .category
                .clone()
                .unwrap_or_else(|| title_fallback.to_string()),
            description: place.description.clone().unwrap_or_default(),
            confidence: confidence.clamp(0.0, 1.0),
            highlights: place.accommodations.iter().take(MAX_HIGHLIGHTS).cloned().collect(),
        }
    }
}

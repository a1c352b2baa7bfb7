use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::YatraError;

/// Kind of catalog item an interaction refers to.
///
/// Only `Place` is currently exercised by the recommenders; festivals and
/// guides are recorded but not yet ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Place,
    Festival,
    Guide,
}

impl ItemType {
    /// Wire token, as stored in the interaction log.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::Festival => "festival",
            Self::Guide => "guide",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = YatraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "place" => Ok(Self::Place),
            "festival" => Ok(Self::Festival),
            "guide" => Ok(Self::Guide),
            other => Err(YatraError::validation(format!(
                "unsupported item type '{other}'"
            ))),
        }
    }
}

/// One observed engagement action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Like,
    Bookmark,
    Rate,
}

impl Action {
    /// Positive signals feed both recommenders; views do not.
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Like | Self::Bookmark | Self::Rate)
    }

    /// Wire token, as stored in the interaction log.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Like => "like",
            Self::Bookmark => "bookmark",
            Self::Rate => "rate",
        }
    }

    /// The three positive actions, in wire form. Used to build SQL filters.
    pub fn positive_tokens() -> [&'static str; 3] {
        ["like", "bookmark", "rate"]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = YatraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "like" => Ok(Self::Like),
            "bookmark" => Ok(Self::Bookmark),
            "rate" => Ok(Self::Rate),
            other => Err(YatraError::validation(format!(
                "unsupported action '{other}'"
            ))),
        }
    }
}

/// One stored interaction event.
///
/// For `view` every event is its own row (retained for future
/// recency/frequency modeling). For like/bookmark/rate, at most one row
/// exists per `(actor_id, item_type, item_id, action)` tuple; a later event
/// with the same identity replaces `value` and `metadata` in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// UUID v4 identifier.
    pub id: String,
    /// Authenticated actor who performed the action.
    pub actor_id: String,
    /// Kind of item acted on.
    pub item_type: ItemType,
    /// Catalog identifier of the item.
    pub item_id: String,
    /// What the actor did.
    pub action: Action,
    /// Numeric strength. Required (and range-checked 0-5) only for `rate`.
    pub value: Option<f64>,
    /// Opaque auxiliary payload; not interpreted by the recommenders.
    pub metadata: Option<serde_json::Value>,
    /// Set at creation, immutable thereafter. An upsert keeps the original.
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Build a new interaction with a fresh id and the current timestamp.
    pub fn new(
        actor_id: impl Into<String>,
        item_type: ItemType,
        item_id: impl Into<String>,
        action: Action,
        value: Option<f64>,
        metadata: Option<serde_json::Value>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            actor_id: actor_id.into(),
            item_type,
            item_id: item_id.into(),
            action,
            value,
            metadata,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_parse_round_trip() {
        for token in ["view", "like", "bookmark", "rate"] {
            let action: Action = token.parse().unwrap();
            assert_eq!(action.as_str(), token);
        }
    }

    #[test]
    fn unknown_action_is_validation_error() {
        let err = "share".parse::<Action>().unwrap_err();
        assert!(matches!(err, YatraError::Validation { .. }));
    }

    #[test]
    fn views_are_not_positive() {
        assert!(!Action::View.is_positive());
        assert!(Action::Like.is_positive());
        assert!(Action::Bookmark.is_positive());
        assert!(Action::Rate.is_positive());
    }
}

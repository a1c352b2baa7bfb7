//! Validates and persists a single interaction event.
//!
//! Views append a fresh row every time; like/bookmark/rate upsert on the
//! identity tuple so repeating the action only replaces value/metadata.

use serde::Deserialize;

use yatra_core::constants::MAX_RATING;
use yatra_core::errors::{YatraError, YatraResult};
use yatra_core::interaction::{Action, Interaction, ItemType};
use yatra_core::traits::IInteractionLog;

/// Wire-shaped record request. `item_type` and `action` arrive as strings
/// from the transport layer and are validated here.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordRequest {
    pub item_type: String,
    pub item_id: String,
    pub action: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

pub struct InteractionRecorder<'a> {
    log: &'a dyn IInteractionLog,
}

impl<'a> InteractionRecorder<'a> {
    pub fn new(log: &'a dyn IInteractionLog) -> Self {
        Self { log }
    }

    /// Validate and persist one interaction. `actor` is the authenticated
    /// caller identity as resolved by the session layer; `None` (or blank)
    /// is an authorization failure, never a silent fallback.
    pub fn record(&self, actor: Option<&str>, request: &RecordRequest) -> YatraResult<Interaction> {
        let actor_id = match actor {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                return Err(YatraError::Auth {
                    reason: "actor identity required".into(),
                })
            }
        };

        if request.item_type.trim().is_empty()
            || request.item_id.trim().is_empty()
            || request.action.trim().is_empty()
        {
            return Err(YatraError::validation("missing required fields"));
        }

        let item_type: ItemType = request.item_type.parse()?;
        let action: Action = request.action.parse()?;

        if uuid::Uuid::parse_str(&request.item_id).is_err() {
            return Err(YatraError::validation(format!(
                "invalid item id '{}'",
                request.item_id
            )));
        }

        let value = match action {
            Action::Rate => {
                let v = request
                    .value
                    .ok_or_else(|| YatraError::validation("rating value must be 0-5"))?;
                if !v.is_finite() || !(0.0..=MAX_RATING).contains(&v) {
                    return Err(YatraError::validation("rating value must be 0-5"));
                }
                Some(v)
            }
            _ => request.value,
        };

        let interaction = Interaction::new(
            actor_id,
            item_type,
            request.item_id.clone(),
            action,
            value,
            request.metadata.clone(),
        );

        // Every view is retained as its own event; positive actions are
        // idempotent on the identity tuple.
        if action == Action::View {
            self.log.append(&interaction)
        } else {
            self.log.upsert(&interaction)
        }
    }
}

use crate::errors::YatraResult;
use crate::interaction::{Interaction, ItemType};

/// One cohort actor's deduplicated positive item set, as produced by the
/// grouped aggregation behind the collaborative recommender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorItemSet {
    pub actor_id: String,
    pub items: Vec<String>,
}

/// Durable interaction log. Append semantics for views, identity-tuple
/// upsert semantics for the positive actions.
pub trait IInteractionLog: Send + Sync {
    /// Insert a new row unconditionally. Used for `view` events.
    fn append(&self, interaction: &Interaction) -> YatraResult<Interaction>;

    /// Insert-or-replace keyed by `(actor_id, item_type, item_id, action)`.
    /// On conflict, `value` and `metadata` are replaced and the original
    /// `created_at` is preserved. Returns the stored row. The underlying
    /// write is atomic; concurrent upserts of the same tuple resolve
    /// last-write-wins.
    fn upsert(&self, interaction: &Interaction) -> YatraResult<Interaction>;

    /// The actor's most recent positive interactions on the given item type,
    /// newest first, capped at `limit`.
    fn recent_positive(
        &self,
        actor_id: &str,
        item_type: ItemType,
        limit: usize,
    ) -> YatraResult<Vec<Interaction>>;

    /// Distinct item ids the actor has positively interacted with.
    fn distinct_positive_items(
        &self,
        actor_id: &str,
        item_type: ItemType,
    ) -> YatraResult<Vec<String>>;

    /// For every actor other than `exclude_actor` who positively interacted
    /// with at least one of `seed_items`, their full deduplicated positive
    /// item set on `item_type` — including items outside the seed set.
    fn positive_item_sets(
        &self,
        item_type: ItemType,
        seed_items: &[String],
        exclude_actor: &str,
    ) -> YatraResult<Vec<ActorItemSet>>;
}

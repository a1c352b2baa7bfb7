//! Item-item collaborative recommender built on co-occurrence counts.
//!
//! Two items co-occur once for every other actor whose positive item set
//! contains both. Destinations the caller already likes are excluded; the
//! remaining candidates are ranked by the total count contributed by the
//! caller's own items.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use yatra_core::config::RecommendConfig;
use yatra_core::errors::YatraResult;
use yatra_core::interaction::ItemType;
use yatra_core::recommendation::{Recommendation, Strategy};
use yatra_core::traits::{ICatalogStore, IInteractionLog};

/// Title used when a recommended place has no category.
const TITLE_FALLBACK: &str = "Popular Among Similar Users";

/// Sparse co-occurrence model: ordered item pair -> count. Request-scoped,
/// rebuilt from the interaction log on every call.
#[derive(Debug, Default)]
pub struct CoOccurrence {
    counts: HashMap<(String, String), u64>,
}

impl CoOccurrence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one actor's item set: every ordered pair of distinct items
    /// gets a +1. Symmetric by construction.
    pub fn record_set(&mut self, items: &[String]) {
        for (i, src) in items.iter().enumerate() {
            for (j, dst) in items.iter().enumerate() {
                if i == j {
                    continue;
                }
                *self
                    .counts
                    .entry((src.clone(), dst.clone()))
                    .or_insert(0) += 1;
            }
        }
    }

    /// Count for one ordered pair.
    pub fn get(&self, src: &str, dst: &str) -> u64 {
        self.counts
            .get(&(src.to_string(), dst.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Aggregate counts per destination: for every pair whose source is in
    /// the caller's set and whose destination is not, sum the counts.
    pub fn aggregate(&self, caller_items: &HashSet<String>) -> HashMap<String, u64> {
        let mut totals: HashMap<String, u64> = HashMap::new();
        for ((src, dst), count) in &self.counts {
            if !caller_items.contains(src) || caller_items.contains(dst) {
                continue;
            }
            *totals.entry(dst.clone()).or_insert(0) += count;
        }
        totals
    }
}

pub struct CollaborativeRecommender<'a> {
    log: &'a dyn IInteractionLog,
    catalog: &'a dyn ICatalogStore,
    config: &'a RecommendConfig,
}

impl<'a> CollaborativeRecommender<'a> {
    pub fn new(
        log: &'a dyn IInteractionLog,
        catalog: &'a dyn ICatalogStore,
        config: &'a RecommendConfig,
    ) -> Self {
        Self {
            log,
            catalog,
            config,
        }
    }

    /// Saturating confidence transform: count 0 maps to the base (0.6) and
    /// the result approaches but never reaches the cap (0.99).
    fn confidence(&self, count: u64) -> f64 {
        let raw = self.config.collab_base_confidence + (1.0 + count as f64).log10() / 2.0;
        raw.min(self.config.confidence_cap)
    }

    /// Rank up to `limit` places by aggregated co-occurrence with the
    /// caller's positive set. No positive signals means an empty result,
    /// not an error.
    pub fn recommend(&self, actor_id: &str, limit: usize) -> YatraResult<Vec<Recommendation>> {
        let caller_items = self
            .log
            .distinct_positive_items(actor_id, ItemType::Place)?;
        if caller_items.is_empty() {
            debug!(actor = actor_id, "no positive signals, empty result");
            return Ok(Vec::new());
        }

        let cohort = self
            .log
            .positive_item_sets(ItemType::Place, &caller_items, actor_id)?;
        debug!(
            actor = actor_id,
            cohort = cohort.len(),
            "gathered cohort item sets"
        );

        let mut model = CoOccurrence::new();
        for set in &cohort {
            model.record_set(&set.items);
        }

        let caller_set: HashSet<String> = caller_items.into_iter().collect();
        let mut ranked: Vec<(String, u64)> = model.aggregate(&caller_set).into_iter().collect();
        // Descending count; ties break on item id ascending.
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);

        let ids: Vec<String> = ranked.iter().map(|(id, _)| id.clone()).collect();
        let places: HashMap<String, _> = self
            .catalog
            .find_by_ids(&ids)?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        let mut results = Vec::with_capacity(ranked.len());
        for (id, count) in ranked {
            match places.get(&id) {
                Some(place) => results.push(Recommendation::from_place(
                    place,
                    Strategy::Collaborative,
                    TITLE_FALLBACK,
                    self.confidence(count),
                )),
                None => {
                    // The item was interacted with but has since left the
                    // catalog. Dropping it is deliberate; the rest of the
                    // ranking still stands.
                    debug!(item = %id, "dropping unresolvable collaborative candidate");
                }
            }
        }

        info!(
            actor = actor_id,
            results = results.len(),
            "collaborative ranking complete"
        );
        Ok(results)
    }
}

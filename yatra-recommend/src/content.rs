//! Content-based recommender: ranks unseen places by cosine similarity
//! between their token vectors and the actor's aggregate preference vector.

use std::collections::HashSet;

use tracing::{debug, info};

use yatra_core::config::RecommendConfig;
use yatra_core::errors::YatraResult;
use yatra_core::interaction::ItemType;
use yatra_core::recommendation::{Recommendation, Strategy};
use yatra_core::traits::{ICatalogStore, IInteractionLog};

use crate::features;
use crate::vector::SparseVector;

/// Title used when a recommended place has no category.
const TITLE_FALLBACK: &str = "Recommended Place";

pub struct ContentRecommender<'a> {
    log: &'a dyn IInteractionLog,
    catalog: &'a dyn ICatalogStore,
    config: &'a RecommendConfig,
}

impl<'a> ContentRecommender<'a> {
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

    /// Rank up to `limit` places the actor has not positively interacted
    /// with, by similarity to their recent positive signals.
    ///
    /// An actor with no positive signals gets an empty preference vector;
    /// every candidate then scores 0 and up to `limit` are still returned.
    /// That means "no personalization signal yet", not an error.
    pub fn recommend(&self, actor_id: &str, limit: usize) -> YatraResult<Vec<Recommendation>> {
        let signals =
            self.log
                .recent_positive(actor_id, ItemType::Place, self.config.positive_window)?;
        let liked_ids: HashSet<String> = signals.iter().map(|i| i.item_id.clone()).collect();
        debug!(
            actor = actor_id,
            signals = signals.len(),
            liked = liked_ids.len(),
            "gathered positive signals"
        );

        let liked_id_list: Vec<String> = liked_ids.iter().cloned().collect();
        let liked_places = self.catalog.find_by_ids(&liked_id_list)?;

        let mut preference = SparseVector::new();
        for place in &liked_places {
            let tokens = features::extract(place, self.config.description_token_cap);
            preference.merge(&SparseVector::from_tokens(tokens));
        }

        let mut scored: Vec<(Recommendation, f64)> = self
            .catalog
            .find_all()?
            .into_iter()
            .filter(|p| !liked_ids.contains(&p.id))
            .map(|p| {
                let tokens = features::extract(&p, self.config.description_token_cap);
                let score = preference
                    .cosine(&SparseVector::from_tokens(tokens))
                    .clamp(0.0, 1.0);
                let rec = Recommendation::from_place(&p, Strategy::Content, TITLE_FALLBACK, score);
                (rec, score)
            })
            .collect();

        // Descending score; ties break on place id ascending so ranking is
        // reproducible.
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.id.cmp(&b.0.id))
        });
        scored.truncate(limit);

        info!(
            actor = actor_id,
            results = scored.len(),
            "content-based ranking complete"
        );
        Ok(scored.into_iter().map(|(rec, _)| rec).collect())
    }
}

//! RecommendEngine: implements IRecommender, wires the two recommenders
//! and the hybrid merger to the storage collaborators.

use tracing::debug;

use yatra_core::config::RecommendConfig;
use yatra_core::errors::YatraResult;
use yatra_core::recommendation::Recommendation;
use yatra_core::traits::{ICatalogStore, IInteractionLog, IRecommender};

use crate::collaborative::CollaborativeRecommender;
use crate::content::ContentRecommender;
use crate::hybrid;

/// The main recommendation engine. No state survives a call: preference
/// vectors and the co-occurrence model are rebuilt per request.
pub struct RecommendEngine<'a> {
    log: &'a dyn IInteractionLog,
    catalog: &'a dyn ICatalogStore,
    config: RecommendConfig,
}

impl<'a> RecommendEngine<'a> {
    pub fn new(log: &'a dyn IInteractionLog, catalog: &'a dyn ICatalogStore) -> Self {
        Self::with_config(log, catalog, RecommendConfig::default())
    }

    pub fn with_config(
        log: &'a dyn IInteractionLog,
        catalog: &'a dyn ICatalogStore,
        config: RecommendConfig,
    ) -> Self {
        Self {
            log,
            catalog,
            config,
        }
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }
}

impl<'a> IRecommender for RecommendEngine<'a> {
    fn recommend_content(&self, actor_id: &str, limit: usize) -> YatraResult<Vec<Recommendation>> {
        ContentRecommender::new(self.log, self.catalog, &self.config).recommend(actor_id, limit)
    }

    fn recommend_collaborative(
        &self,
        actor_id: &str,
        limit: usize,
    ) -> YatraResult<Vec<Recommendation>> {
        CollaborativeRecommender::new(self.log, self.catalog, &self.config)
            .recommend(actor_id, limit)
    }

    fn recommend_hybrid(&self, actor_id: &str, limit: usize) -> YatraResult<Vec<Recommendation>> {
        // The two recommenders share no mutable state, so they fan out in
        // parallel; each is asked for a full `limit` of candidates.
        let (content, collaborative) = rayon::join(
            || self.recommend_content(actor_id, limit),
            || self.recommend_collaborative(actor_id, limit),
        );
        let (content, collaborative) = (content?, collaborative?);
        debug!(
            actor = actor_id,
            content = content.len(),
            collaborative = collaborative.len(),
            "merging sub-rankings"
        );

        Ok(hybrid::merge_weighted(
            content,
            collaborative,
            &self.config,
            limit,
        ))
    }
}

use crate::errors::YatraResult;
use crate::recommendation::Recommendation;

/// The three ranking operations exposed by the subsystem.
///
/// Each call either returns the full ranked list (possibly empty) or fails
/// as a whole; a partially-scored list is never surfaced.
pub trait IRecommender: Send + Sync {
    fn recommend_content(&self, actor_id: &str, limit: usize) -> YatraResult<Vec<Recommendation>>;

    fn recommend_collaborative(
        &self,
        actor_id: &str,
        limit: usize,
    ) -> YatraResult<Vec<Recommendation>>;

    fn recommend_hybrid(&self, actor_id: &str, limit: usize) -> YatraResult<Vec<Recommendation>>;
}

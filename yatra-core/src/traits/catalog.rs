use crate::catalog::Place;
use crate::errors::YatraResult;

/// Read-only view of the destination catalog.
pub trait ICatalogStore: Send + Sync {
    fn find_by_id(&self, id: &str) -> YatraResult<Option<Place>>;

    /// Resolve a batch of ids. Ids with no catalog row are skipped, not errors;
    /// the returned order is unspecified.
    fn find_by_ids(&self, ids: &[String]) -> YatraResult<Vec<Place>>;

    /// Full candidate pool, ordered by id ascending for deterministic ranking.
    fn find_all(&self) -> YatraResult<Vec<Place>>;
}

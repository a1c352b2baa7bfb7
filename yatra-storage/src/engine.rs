//! StorageEngine — owns the ConnectionPool, implements ICatalogStore and
//! IInteractionLog, runs migrations on open.

use std::path::Path;

use yatra_core::catalog::Place;
use yatra_core::errors::YatraResult;
use yatra_core::interaction::{Interaction, ItemType};
use yatra_core::traits::{ActorItemSet, ICatalogStore, IInteractionLog};

use crate::migrations;
use crate::pool::ConnectionPool;

/// The main storage engine. Owns the connection pool and provides both
/// collaborator interfaces the recommenders consume.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> YatraResult<Self> {
        let pool = ConnectionPool::open(path, 4)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> YatraResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations.
    fn initialize(&self) -> YatraResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| migrations::run_migrations(conn))
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Seed a catalog place. Catalog writes live outside the recommendation
    /// subsystem proper; this exists for ingestion jobs and tests.
    pub fn insert_place(&self, place: &Place) -> YatraResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::place_ops::insert_place(conn, place))
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: uses the read pool (no writer contention).
    /// In-memory: uses the writer (read pool is isolated).
    fn with_reader<F, T>(&self, f: F) -> YatraResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> YatraResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl IInteractionLog for StorageEngine {
    fn append(&self, interaction: &Interaction) -> YatraResult<Interaction> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::interaction_ops::append_interaction(conn, interaction)
        })
    }

    fn upsert(&self, interaction: &Interaction) -> YatraResult<Interaction> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::interaction_ops::upsert_interaction(conn, interaction)
        })
    }

    fn recent_positive(
        &self,
        actor_id: &str,
        item_type: ItemType,
        limit: usize,
    ) -> YatraResult<Vec<Interaction>> {
        self.with_reader(|conn| {
            crate::queries::interaction_ops::recent_positive(conn, actor_id, item_type, limit)
        })
    }

    fn distinct_positive_items(
        &self,
        actor_id: &str,
        item_type: ItemType,
    ) -> YatraResult<Vec<String>> {
        self.with_reader(|conn| {
            crate::queries::interaction_ops::distinct_positive_items(conn, actor_id, item_type)
        })
    }

    fn positive_item_sets(
        &self,
        item_type: ItemType,
        seed_items: &[String],
        exclude_actor: &str,
    ) -> YatraResult<Vec<ActorItemSet>> {
        self.with_reader(|conn| {
            crate::queries::interaction_ops::positive_item_sets(
                conn,
                item_type,
                seed_items,
                exclude_actor,
            )
        })
    }
}

impl ICatalogStore for StorageEngine {
    fn find_by_id(&self, id: &str) -> YatraResult<Option<Place>> {
        self.with_reader(|conn| crate::queries::place_ops::find_by_id(conn, id))
    }

    fn find_by_ids(&self, ids: &[String]) -> YatraResult<Vec<Place>> {
        self.with_reader(|conn| crate::queries::place_ops::find_by_ids(conn, ids))
    }

    fn find_all(&self) -> YatraResult<Vec<Place>> {
        self.with_reader(|conn| crate::queries::place_ops::find_all(conn))
    }
}

//! The single write connection. All mutations are serialized through it,
//! which is what makes the interaction upsert atomic under concurrency.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use yatra_core::errors::YatraResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Mutex-guarded writer. SQLite allows one writer at a time anyway; the
/// mutex keeps contention in-process instead of surfacing SQLITE_BUSY.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the write connection for the given database file.
    pub fn open(path: &Path) -> YatraResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory write connection (for testing).
    pub fn open_in_memory() -> YatraResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> YatraResult<T>
    where
        F: FnOnce(&Connection) -> YatraResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}

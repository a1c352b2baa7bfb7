//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, 5s busy_timeout, foreign_keys ON.

use rusqlite::Connection;

use yatra_core::errors::YatraResult;

use crate::to_storage_err;

/// Apply all performance and safety pragmas to a connection.
pub fn apply_pragmas(conn: &Connection) -> YatraResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Pragmas for read-only pool connections. WAL is a database property, so
/// readers only need the busy timeout.
pub fn apply_read_pragmas(conn: &Connection) -> YatraResult<()> {
    conn.execute_batch("PRAGMA busy_timeout = 5000;")
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

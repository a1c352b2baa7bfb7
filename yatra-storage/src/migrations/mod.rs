//! Versioned schema migrations. Each migration runs at most once; applied
//! versions are tracked in `schema_migrations`.

mod v001_interaction_tables;

use rusqlite::{params, Connection};

use yatra_core::errors::YatraResult;

use crate::to_storage_err;

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Run all pending migrations on the given connection.
pub fn run_migrations(conn: &Connection) -> YatraResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let applied = applied_version(conn)?;
    if applied < SCHEMA_VERSION {
        apply(conn, SCHEMA_VERSION, v001_interaction_tables::migrate)?;
    }
    Ok(())
}

/// Highest applied migration version, 0 when none.
pub fn applied_version(conn: &Connection) -> YatraResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get::<_, u32>(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn apply(
    conn: &Connection,
    version: u32,
    migrate: fn(&Connection) -> YatraResult<()>,
) -> YatraResult<()> {
    migrate(conn)?;
    conn.execute(
        "INSERT INTO schema_migrations (version) VALUES (?1)",
        params![version],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    tracing::info!(version, "applied schema migration");
    Ok(())
}

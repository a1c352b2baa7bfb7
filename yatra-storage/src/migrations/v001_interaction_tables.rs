//! v001: interactions, places.

use rusqlite::Connection;

use yatra_core::errors::YatraResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> YatraResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS interactions (
            id          TEXT PRIMARY KEY,
            actor_id    TEXT NOT NULL,
            item_type   TEXT NOT NULL,
            item_id     TEXT NOT NULL,
            action      TEXT NOT NULL,
            value       REAL,
            metadata    TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_interactions_item ON interactions(item_type, item_id);
        CREATE INDEX IF NOT EXISTS idx_interactions_actor_type ON interactions(actor_id, item_type);
        CREATE INDEX IF NOT EXISTS idx_interactions_actor_item ON interactions(actor_id, item_id, action);

        -- Identity-tuple uniqueness holds for the positive actions only;
        -- every view is an independent row.
        CREATE UNIQUE INDEX IF NOT EXISTS idx_interactions_identity
            ON interactions(actor_id, item_type, item_id, action)
            WHERE action != 'view';

        CREATE TABLE IF NOT EXISTS places (
            id             TEXT PRIMARY KEY,
            name           TEXT NOT NULL,
            state          TEXT NOT NULL,
            location       TEXT,
            description    TEXT,
            category       TEXT,
            image_url      TEXT,
            accommodations TEXT NOT NULL DEFAULT '[]',
            foods          TEXT NOT NULL DEFAULT '[]',
            transport      TEXT NOT NULL DEFAULT '[]'
        );

        CREATE INDEX IF NOT EXISTS idx_places_state ON places(state);
        CREATE INDEX IF NOT EXISTS idx_places_category ON places(category);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

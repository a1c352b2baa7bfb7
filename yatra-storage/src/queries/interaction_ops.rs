//! Append, upsert, and query operations on the interaction log.

use rusqlite::{params, Connection, ToSql};

use yatra_core::errors::YatraResult;
use yatra_core::interaction::{Action, Interaction, ItemType};
use yatra_core::traits::ActorItemSet;

use crate::to_storage_err;

/// SQL fragment matching the positive actions.
fn positive_actions_sql() -> String {
    let quoted: Vec<String> = Action::positive_tokens()
        .iter()
        .map(|a| format!("'{a}'"))
        .collect();
    format!("({})", quoted.join(","))
}

/// Insert a new interaction row unconditionally (view semantics).
pub fn append_interaction(conn: &Connection, interaction: &Interaction) -> YatraResult<Interaction> {
    let metadata_json = interaction
        .metadata
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    conn.execute(
        "INSERT INTO interactions (id, actor_id, item_type, item_id, action, value, metadata, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            interaction.id,
            interaction.actor_id,
            interaction.item_type.as_str(),
            interaction.item_id,
            interaction.action.as_str(),
            interaction.value,
            metadata_json,
            interaction.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(interaction.clone())
}

/// Insert-or-replace keyed by the identity tuple (positive-action semantics).
///
/// On conflict the existing row keeps its id and `created_at`; only `value`
/// and `metadata` are replaced. Returns the row as stored.
pub fn upsert_interaction(conn: &Connection, interaction: &Interaction) -> YatraResult<Interaction> {
    let metadata_json = interaction
        .metadata
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    conn.execute(
        "INSERT INTO interactions (id, actor_id, item_type, item_id, action, value, metadata, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT (actor_id, item_type, item_id, action) WHERE action != 'view'
         DO UPDATE SET value = excluded.value, metadata = excluded.metadata",
        params![
            interaction.id,
            interaction.actor_id,
            interaction.item_type.as_str(),
            interaction.item_id,
            interaction.action.as_str(),
            interaction.value,
            metadata_json,
            interaction.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    // Re-read by identity so the caller sees the stored id and created_at.
    let mut stmt = conn
        .prepare(
            "SELECT id, actor_id, item_type, item_id, action, value, metadata, created_at
             FROM interactions
             WHERE actor_id = ?1 AND item_type = ?2 AND item_id = ?3 AND action = ?4",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let stored = stmt
        .query_row(
            params![
                interaction.actor_id,
                interaction.item_type.as_str(),
                interaction.item_id,
                interaction.action.as_str(),
            ],
            |row| Ok(row_to_interaction(row)),
        )
        .map_err(|e| to_storage_err(e.to_string()))??;

    Ok(stored)
}

/// The actor's most recent positive interactions, newest first.
pub fn recent_positive(
    conn: &Connection,
    actor_id: &str,
    item_type: ItemType,
    limit: usize,
) -> YatraResult<Vec<Interaction>> {
    let sql = format!(
        "SELECT id, actor_id, item_type, item_id, action, value, metadata, created_at
         FROM interactions
         WHERE actor_id = ?1 AND item_type = ?2 AND action IN {}
         ORDER BY created_at DESC
         LIMIT ?3",
        positive_actions_sql()
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(
            params![actor_id, item_type.as_str(), limit as i64],
            |row| Ok(row_to_interaction(row)),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut interactions = Vec::new();
    for row in rows {
        interactions.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(interactions)
}

/// Distinct item ids the actor has positively interacted with, id ascending.
pub fn distinct_positive_items(
    conn: &Connection,
    actor_id: &str,
    item_type: ItemType,
) -> YatraResult<Vec<String>> {
    let sql = format!(
        "SELECT DISTINCT item_id FROM interactions
         WHERE actor_id = ?1 AND item_type = ?2 AND action IN {}
         ORDER BY item_id ASC",
        positive_actions_sql()
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![actor_id, item_type.as_str()], |row| {
            row.get::<_, String>(0)
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Grouped aggregation behind the collaborative recommender.
///
/// Finds every actor other than `exclude_actor` who positively interacted
/// with at least one seed item, then returns each such actor's full
/// deduplicated positive item set on `item_type`.
pub fn positive_item_sets(
    conn: &Connection,
    item_type: ItemType,
    seed_items: &[String],
    exclude_actor: &str,
) -> YatraResult<Vec<ActorItemSet>> {
    if seed_items.is_empty() {
        return Ok(Vec::new());
    }

    let positive = positive_actions_sql();
    // ?1 = item_type, ?2 = exclude_actor, ?3.. = seed items.
    let seed_placeholders: Vec<String> =
        (0..seed_items.len()).map(|i| format!("?{}", i + 3)).collect();
    let sql = format!(
        "SELECT actor_id, item_id
         FROM interactions
         WHERE item_type = ?1
           AND actor_id != ?2
           AND action IN {positive}
           AND actor_id IN (
               SELECT DISTINCT actor_id FROM interactions
               WHERE item_type = ?1 AND action IN {positive}
                 AND item_id IN ({seeds})
           )
         GROUP BY actor_id, item_id
         ORDER BY actor_id ASC, item_id ASC",
        seeds = seed_placeholders.join(","),
    );

    let mut params_vec: Vec<&dyn ToSql> = Vec::with_capacity(seed_items.len() + 2);
    let item_type_str = item_type.as_str();
    params_vec.push(&item_type_str);
    params_vec.push(&exclude_actor);
    for item in seed_items {
        params_vec.push(item);
    }

    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(&params_vec[..], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    // Rows arrive ordered by actor; fold consecutive runs into sets.
    let mut sets: Vec<ActorItemSet> = Vec::new();
    for row in rows {
        let (actor_id, item_id) = row.map_err(|e| to_storage_err(e.to_string()))?;
        match sets.last_mut() {
            Some(set) if set.actor_id == actor_id => set.items.push(item_id),
            _ => sets.push(ActorItemSet {
                actor_id,
                items: vec![item_id],
            }),
        }
    }
    Ok(sets)
}

/// Parse an interactions row.
fn row_to_interaction(row: &rusqlite::Row<'_>) -> YatraResult<Interaction> {
    let item_type_str: String = row.get(2).map_err(|e| to_storage_err(e.to_string()))?;
    let action_str: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    let metadata_json: Option<String> = row.get(6).map_err(|e| to_storage_err(e.to_string()))?;
    let created_at_str: String = row.get(7).map_err(|e| to_storage_err(e.to_string()))?;

    let metadata = metadata_json
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .map_err(|e| to_storage_err(format!("parse metadata: {e}")))?;
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| to_storage_err(format!("parse created_at '{created_at_str}': {e}")))?;

    Ok(Interaction {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        actor_id: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        item_type: item_type_str.parse()?,
        item_id: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        action: action_str.parse()?,
        value: row.get(5).map_err(|e| to_storage_err(e.to_string()))?,
        metadata,
        created_at,
    })
}

//! Catalog queries: insert (seeding) and the three lookup surfaces.

use rusqlite::{params, Connection, ToSql};

use yatra_core::catalog::Place;
use yatra_core::errors::YatraResult;

use crate::to_storage_err;

const PLACE_COLUMNS: &str =
    "id, name, state, location, description, category, image_url, accommodations, foods, transport";

/// Insert a place. Used by seeding and by tests.
pub fn insert_place(conn: &Connection, place: &Place) -> YatraResult<()> {
    conn.execute(
        "INSERT INTO places (id, name, state, location, description, category, image_url,
                             accommodations, foods, transport)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            place.id,
            place.name,
            place.state,
            place.location,
            place.description,
            place.category,
            place.image_url,
            serde_json::to_string(&place.accommodations)?,
            serde_json::to_string(&place.foods)?,
            serde_json::to_string(&place.transport)?,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Look up a single place by id.
pub fn find_by_id(conn: &Connection, id: &str) -> YatraResult<Option<Place>> {
    let sql = format!("SELECT {PLACE_COLUMNS} FROM places WHERE id = ?1");
    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let mut rows = stmt
        .query_map(params![id], |row| Ok(row_to_place(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    match rows.next() {
        Some(row) => Ok(Some(row.map_err(|e| to_storage_err(e.to_string()))??)),
        None => Ok(None),
    }
}

/// Resolve a batch of ids. Missing ids are skipped.
pub fn find_by_ids(conn: &Connection, ids: &[String]) -> YatraResult<Vec<Place>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders: Vec<String> = (0..ids.len()).map(|i| format!("?{}", i + 1)).collect();
    let sql = format!(
        "SELECT {PLACE_COLUMNS} FROM places WHERE id IN ({}) ORDER BY id ASC",
        placeholders.join(",")
    );
    let params_vec: Vec<&dyn ToSql> = ids.iter().map(|id| id as &dyn ToSql).collect();

    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(&params_vec[..], |row| Ok(row_to_place(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut places = Vec::new();
    for row in rows {
        places.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(places)
}

/// Full catalog, id ascending (the ranking tie-break relies on this order).
pub fn find_all(conn: &Connection) -> YatraResult<Vec<Place>> {
    let sql = format!("SELECT {PLACE_COLUMNS} FROM places ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| Ok(row_to_place(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut places = Vec::new();
    for row in rows {
        places.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(places)
}

/// Parse a places row. The three list columns are stored as JSON text.
fn row_to_place(row: &rusqlite::Row<'_>) -> YatraResult<Place> {
    let parse_list = |json: String, column: &str| -> YatraResult<Vec<String>> {
        serde_json::from_str(&json).map_err(|e| to_storage_err(format!("parse {column}: {e}")))
    };

    let accommodations: String = row.get(7).map_err(|e| to_storage_err(e.to_string()))?;
    let foods: String = row.get(8).map_err(|e| to_storage_err(e.to_string()))?;
    let transport: String = row.get(9).map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Place {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        name: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        state: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        location: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        description: row.get(4).map_err(|e| to_storage_err(e.to_string()))?,
        category: row.get(5).map_err(|e| to_storage_err(e.to_string()))?,
        image_url: row.get(6).map_err(|e| to_storage_err(e.to_string()))?,
        accommodations: parse_list(accommodations, "accommodations")?,
        foods: parse_list(foods, "foods")?,
        transport: parse_list(transport, "transport")?,
    })
}

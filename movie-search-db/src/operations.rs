//! Write operations for building catalog fixtures.
//!
//! The search path never writes to the catalog. These exist so tests and
//! local demo catalogs can be populated through the same schema.

use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: i64 },
}

/// Insert a film row.
pub fn insert_film(
    conn: &Connection,
    film_id: i64,
    title: &str,
    release_year: Option<u16>,
    description: Option<&str>,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO film (film_id, title, release_year, description) VALUES (?1, ?2, ?3, ?4)",
        params![film_id, title, release_year, description],
    )?;
    Ok(())
}

/// Insert a category row.
pub fn insert_category(conn: &Connection, category_id: i64, name: &str) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO category (category_id, name) VALUES (?1, ?2)",
        params![category_id, name],
    )?;
    Ok(())
}

/// Associate a film with a category. Both must already exist.
pub fn link_film_category(
    conn: &Connection,
    film_id: i64,
    category_id: i64,
) -> Result<(), OperationError> {
    ensure_exists(conn, "film", "film_id", film_id)?;
    ensure_exists(conn, "category", "category_id", category_id)?;
    conn.execute(
        "INSERT OR IGNORE INTO film_category (film_id, category_id) VALUES (?1, ?2)",
        params![film_id, category_id],
    )?;
    Ok(())
}

fn ensure_exists(
    conn: &Connection,
    table: &'static str,
    key: &'static str,
    id: i64,
) -> Result<(), OperationError> {
    let exists: bool = conn.query_row(
        &format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE {key} = ?1)"),
        params![id],
        |row| row.get(0),
    )?;
    if !exists {
        return Err(OperationError::NotFound {
            entity_type: table.to_string(),
            id,
        });
    }
    Ok(())
}

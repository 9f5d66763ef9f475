//! Catalog connection setup and schema checks.
//!
//! The catalog is owned by an external database; this module only verifies
//! that the tables searched against are present. [`open_memory`] builds the
//! same subset from scratch for tests and fixtures.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Catalog database not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Catalog is missing required table '{0}'")]
    MissingTable(String),
}

/// Tables every search query reads from.
pub const REQUIRED_TABLES: &[&str] = &["film", "category", "film_category"];

/// Open an existing catalog database read-only and check its tables.
///
/// A missing file is an error rather than an empty new database.
pub fn open_catalog(path: &Path) -> Result<Connection, SchemaError> {
    if !path.exists() {
        return Err(SchemaError::NotFound(path.to_path_buf()));
    }
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    verify_tables(&conn)?;
    log::debug!("Opened catalog at {}", path.display());
    Ok(conn)
}

/// Open an in-memory catalog with the searchable schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Create the film/category tables if they don't exist.
///
/// Idempotent. Column names and types follow the sakila sample database so
/// a real sakila export can be searched without changes.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Fail with [`SchemaError::MissingTable`] for the first required table
/// that does not exist.
pub fn verify_tables(conn: &Connection) -> Result<(), SchemaError> {
    for &table in REQUIRED_TABLES {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
            [table],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(SchemaError::MissingTable(table.to_string()));
        }
    }
    Ok(())
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS film (
    film_id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    release_year INTEGER
);
CREATE INDEX IF NOT EXISTS idx_film_title ON film(title);
CREATE INDEX IF NOT EXISTS idx_film_release_year ON film(release_year);

CREATE TABLE IF NOT EXISTS category (
    category_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS film_category (
    film_id INTEGER NOT NULL REFERENCES film(film_id),
    category_id INTEGER NOT NULL REFERENCES category(category_id),
    PRIMARY KEY (film_id, category_id)
);
CREATE INDEX IF NOT EXISTS idx_film_category_category ON film_category(category_id);
"#;

//! A document collection stored as JSON rows in SQLite.
//!
//! Each collection is one table of `(id, body)` where `body` is the JSON
//! text of a document. Sorting and grouping go through SQLite's built-in
//! `json_extract`, with the field path passed as a bound parameter.

use std::path::Path;

use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, params};
use serde_json::Value;

use crate::error::HistoryError;
use crate::store::{Document, DocumentStore, GroupCount, SortDirection, check_field};

/// A SQLite-backed [`DocumentStore`] for a single named collection.
pub struct SqliteStore {
    conn: Connection,
    /// Quoted table identifier, safe to splice into SQL text.
    table: String,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and the collection table in it.
    ///
    /// Parent directories are created as needed. The collection is created
    /// on first use if absent.
    pub fn open(path: &Path, collection: &str) -> Result<Self, HistoryError> {
        let table = quote_collection(collection)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        let store = Self::with_connection(conn, table)?;
        log::debug!(
            "Opened history collection {} at {}",
            store.table,
            path.display()
        );
        Ok(store)
    }

    /// Open an in-memory collection. Useful for testing.
    pub fn open_memory(collection: &str) -> Result<Self, HistoryError> {
        let table = quote_collection(collection)?;
        Self::with_connection(Connection::open_in_memory()?, table)
    }

    fn with_connection(conn: Connection, table: String) -> Result<Self, HistoryError> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                body TEXT NOT NULL
            );"
        ))?;
        Ok(Self { conn, table })
    }

    /// Number of documents in the collection.
    pub fn count(&self) -> Result<u64, HistoryError> {
        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", self.table), [], |r| {
                r.get(0)
            })?;
        Ok(n as u64)
    }
}

impl DocumentStore for SqliteStore {
    fn insert_one(&mut self, doc: Document) -> Result<(), HistoryError> {
        let body = serde_json::to_string(&doc)?;
        self.conn.execute(
            &format!("INSERT INTO {} (body) VALUES (?1)", self.table),
            params![body],
        )?;
        Ok(())
    }

    fn find_sorted(
        &self,
        field: &str,
        direction: SortDirection,
        limit: usize,
    ) -> Result<Vec<Document>, HistoryError> {
        check_field(field)?;
        let dir = match direction {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        };
        let mut stmt = self.conn.prepare(&format!(
            "SELECT body FROM {}
             ORDER BY json_extract(body, ?1) {dir}, id {dir}
             LIMIT ?2",
            self.table
        ))?;
        let bodies = stmt
            .query_map(params![json_path(field), limit_param(limit)], |row| {
                row.get::<_, String>(0)
            })?
            .collect::<Result<Vec<_>, _>>()?;

        bodies
            .iter()
            .map(|b| serde_json::from_str::<Document>(b).map_err(Into::into))
            .collect()
    }

    fn group_count(&self, field: &str, limit: usize) -> Result<Vec<GroupCount>, HistoryError> {
        check_field(field)?;
        let mut stmt = self.conn.prepare(&format!(
            "SELECT json_extract(body, ?1) AS k, COUNT(*) AS c, MIN(id) AS first_id
             FROM {}
             GROUP BY k
             ORDER BY c DESC, first_id ASC
             LIMIT ?2",
            self.table
        ))?;
        let rows = stmt.query_map(params![json_path(field), limit_param(limit)], |row| {
            let key: SqlValue = row.get(0)?;
            let count: i64 = row.get(1)?;
            Ok(GroupCount {
                key: sql_to_json(key),
                count: count as u64,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

/// Validate a collection name and quote it as an SQL identifier.
fn quote_collection(name: &str) -> Result<String, HistoryError> {
    let reserved = name.to_ascii_lowercase().starts_with("sqlite_");
    if name.trim().is_empty() || name.contains('"') || name.contains('\0') || reserved {
        return Err(HistoryError::InvalidCollection(name.to_string()));
    }
    Ok(format!("\"{name}\""))
}

fn json_path(field: &str) -> String {
    format!("$.{field}")
}

fn limit_param(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

fn sql_to_json(v: SqlValue) -> Value {
    match v {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(i) => Value::from(i),
        SqlValue::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        SqlValue::Text(s) => Value::String(s),
        SqlValue::Blob(b) => Value::String(String::from_utf8_lossy(&b).into_owned()),
    }
}

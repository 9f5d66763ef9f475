use thiserror::Error;

/// Errors raised by a document store or the history views built on it.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// I/O error while preparing the store location
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite-backed store failure
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored document could not be encoded or decoded
    #[error("Document encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Collection name that cannot be used as a table name
    #[error("Invalid collection name: '{0}'")]
    InvalidCollection(String),

    /// Field name that is not a plain identifier
    #[error("Invalid field name: '{0}'")]
    InvalidField(String),
}

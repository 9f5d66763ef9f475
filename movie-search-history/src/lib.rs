//! Search history kept in a document store.
//!
//! [`SearchHistory`] appends one document per accepted search and answers
//! "most frequent" and "most recent" views. The backing store is anything
//! implementing [`DocumentStore`]: an in-process [`MemoryStore`] or a
//! SQLite-backed JSON collection ([`SqliteStore`]).

pub mod error;
pub mod history;
pub mod sqlite;
pub mod store;

pub use error::HistoryError;
pub use history::{DATETIME_FORMAT, QueryCount, SearchHistory, SearchLogEntry};
pub use sqlite::SqliteStore;
pub use store::{Document, DocumentStore, GroupCount, MemoryStore, SortDirection};

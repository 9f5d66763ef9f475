//! Search-history logging and aggregate views.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HistoryError;
use crate::store::{Document, DocumentStore, SortDirection};

/// Timestamp format stored with every search (`YYYY-MM-DD HH:MM`).
///
/// Lexicographic order of formatted strings equals chronological order,
/// which the "most recent" view relies on.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const QUERY_FIELD: &str = "query";
const DATETIME_FIELD: &str = "datetime";

/// One stored search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLogEntry {
    pub query: String,
    pub datetime: String,
}

/// A search label and how many times it was logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCount {
    pub query: String,
    pub count: u64,
}

/// Append-only search history over an injected document store.
pub struct SearchHistory<S> {
    store: S,
}

impl<S: DocumentStore> SearchHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record `label` stamped with the current local time.
    pub fn log_search(&mut self, label: &str) -> Result<SearchLogEntry, HistoryError> {
        self.log_search_at(label, Local::now().naive_local())
    }

    /// Record `label` with an explicit timestamp.
    pub fn log_search_at(
        &mut self,
        label: &str,
        at: NaiveDateTime,
    ) -> Result<SearchLogEntry, HistoryError> {
        let entry = SearchLogEntry {
            query: label.to_string(),
            datetime: at.format(DATETIME_FORMAT).to_string(),
        };
        let doc = match serde_json::to_value(&entry)? {
            Value::Object(map) => map,
            _ => Document::new(),
        };
        self.store.insert_one(doc)?;
        log::debug!("Logged search '{}' at {}", entry.query, entry.datetime);
        Ok(entry)
    }

    /// The `n` most frequently logged labels, most frequent first.
    ///
    /// Groups without a usable `query` value are skipped.
    pub fn top_by_frequency(&self, n: usize) -> Result<Vec<QueryCount>, HistoryError> {
        let groups = self.store.group_count(QUERY_FIELD, n)?;
        Ok(groups
            .into_iter()
            .filter_map(|g| {
                let query = match g.key {
                    Value::String(s) => s,
                    Value::Number(num) => num.to_string(),
                    other => {
                        log::warn!("Skipping history group with query value {other}");
                        return None;
                    }
                };
                Some(QueryCount {
                    query,
                    count: g.count,
                })
            })
            .collect())
    }

    /// The `n` most recently logged searches, newest first.
    ///
    /// Documents that don't decode as a [`SearchLogEntry`] are skipped.
    pub fn most_recent(&self, n: usize) -> Result<Vec<SearchLogEntry>, HistoryError> {
        let docs = self
            .store
            .find_sorted(DATETIME_FIELD, SortDirection::Descending, n)?;
        Ok(docs.into_iter().filter_map(decode_entry).collect())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Decode a stored document, accepting numeric `query` values.
fn decode_entry(mut doc: Document) -> Option<SearchLogEntry> {
    if let Some(Value::Number(num)) = doc.get(QUERY_FIELD) {
        let text = num.to_string();
        doc.insert(QUERY_FIELD.to_string(), Value::String(text));
    }
    match serde_json::from_value(Value::Object(doc)) {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::warn!("Skipping malformed history document: {e}");
            None
        }
    }
}

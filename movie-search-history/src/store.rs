//! The document-store boundary and an in-process implementation.

use std::cmp::Ordering;

use serde_json::Value;

use crate::error::HistoryError;

/// A schema-less document: a JSON object.
pub type Document = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One bucket of a group-and-count aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCount {
    /// The grouped field's value; `Null` for documents without the field.
    pub key: Value,
    pub count: u64,
}

/// Minimal document-collection operations used by the search history.
///
/// Ordering contract shared by all implementations:
/// - `find_sorted` breaks ties on insertion order, in the requested direction
///   (newest first when descending).
/// - `group_count` sorts by count descending and breaks ties by first
///   appearance.
pub trait DocumentStore {
    /// Append a document to the collection.
    fn insert_one(&mut self, doc: Document) -> Result<(), HistoryError>;

    /// Return up to `limit` documents ordered by `field`.
    fn find_sorted(
        &self,
        field: &str,
        direction: SortDirection,
        limit: usize,
    ) -> Result<Vec<Document>, HistoryError>;

    /// Group documents by `field`, count each group, and return the `limit`
    /// largest groups.
    fn group_count(&self, field: &str, limit: usize) -> Result<Vec<GroupCount>, HistoryError>;
}

/// Reject field names that are not plain identifiers.
pub(crate) fn check_field(field: &str) -> Result<(), HistoryError> {
    let valid = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(HistoryError::InvalidField(field.to_string()))
    }
}

// ── In-memory store ─────────────────────────────────────────────────────────

/// A document collection held in a `Vec`, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    docs: Vec<Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// All documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.docs
    }
}

impl DocumentStore for MemoryStore {
    fn insert_one(&mut self, doc: Document) -> Result<(), HistoryError> {
        self.docs.push(doc);
        Ok(())
    }

    fn find_sorted(
        &self,
        field: &str,
        direction: SortDirection,
        limit: usize,
    ) -> Result<Vec<Document>, HistoryError> {
        check_field(field)?;
        let mut indexed: Vec<(usize, &Document)> = self.docs.iter().enumerate().collect();
        indexed.sort_by(|(ia, a), (ib, b)| {
            let ord = compare_values(a.get(field), b.get(field)).then(ia.cmp(ib));
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        Ok(indexed
            .into_iter()
            .take(limit)
            .map(|(_, d)| d.clone())
            .collect())
    }

    fn group_count(&self, field: &str, limit: usize) -> Result<Vec<GroupCount>, HistoryError> {
        check_field(field)?;
        let mut groups: Vec<GroupCount> = Vec::new();
        for doc in &self.docs {
            let key = doc.get(field).cloned().unwrap_or(Value::Null);
            match groups.iter_mut().find(|g| g.key == key) {
                Some(g) => g.count += 1,
                None => groups.push(GroupCount { key, count: 1 }),
            }
        }
        // Stable: equal counts keep first-appearance order.
        groups.sort_by(|a, b| b.count.cmp(&a.count));
        groups.truncate(limit);
        Ok(groups)
    }
}

/// Order two optional JSON values: missing/null < bool < number < string.
/// Arrays and objects sort after strings, by their serialized text.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) if rank(a) == 4 && rank(b) == 4 => x.to_string().cmp(&y.to_string()),
        _ => rank(a).cmp(&rank(b)),
    }
}

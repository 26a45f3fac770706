//! Case-insensitive filtering of the book list.
//!
//! The query is compared as given: it is lowercased but never trimmed, so
//! `" "` only matches books with a space in the title or author.

use tracing::trace;

use crate::book::BookRecord;

/// True when the title or author contains `query`, ignoring case.
pub fn matches(record: &BookRecord, query: &str) -> bool {
    contains_lowered(record, &query.to_lowercase())
}

/// Every record matching `query`, in input order. An empty query keeps all.
pub fn filter<'a>(records: &'a [BookRecord], query: &str) -> Vec<&'a BookRecord> {
    let needle = query.to_lowercase();
    let visible: Vec<&BookRecord> = records
        .iter()
        .filter(|record| contains_lowered(record, &needle))
        .collect();
    trace!(query, total = records.len(), visible = visible.len(), "filtered");
    visible
}

fn contains_lowered(record: &BookRecord, needle: &str) -> bool {
    record.title().to_lowercase().contains(needle) || record.author().to_lowercase().contains(needle)
}

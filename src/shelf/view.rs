use serde::{Deserialize, Serialize};

use crate::book::BookRecord;

use super::DraftInput;

/// Render-ready output, re-derived after every event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfView {
    pub visible: Vec<BookRecord>,
    pub draft: DraftInput,
    pub query: String,
    /// Books in the store, ignoring the query.
    pub total: usize,
}

impl ShelfView {
    /// Nothing matches the query; shown as "No books found."
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

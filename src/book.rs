use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a book within one shelf session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    pub fn new(raw: u64) -> Self {
        BookId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BookId {
    fn from(raw: u64) -> Self {
        BookId(raw)
    }
}

/// A catalog entry. Title and author are kept exactly as submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    id: BookId,
    title: String,
    author: String,
}

impl BookRecord {
    pub(crate) fn new(id: BookId, title: String, author: String) -> Self {
        BookRecord { id, title, author }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

/// True when `text` has something other than whitespace in it.
pub(crate) fn is_filled(text: &str) -> bool {
    !text.trim().is_empty()
}

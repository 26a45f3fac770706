use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A book placed on the shelf when a session starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedBook {
    pub title: String,
    pub author: String,
}

impl SeedBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        SeedBook {
            title: title.into(),
            author: author.into(),
        }
    }
}

/// Session settings. A missing `seed` key falls back to the default catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    pub seed: Vec<SeedBook>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        ShelfConfig {
            seed: vec![
                SeedBook::new("The Great Gatsby", "S. Scott Fitzgerald"),
                SeedBook::new("To Kill a Mockingbird", "Harper Lee"),
            ],
        }
    }
}

impl ShelfConfig {
    /// A config that starts with an empty shelf.
    pub fn empty() -> Self {
        ShelfConfig { seed: Vec::new() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

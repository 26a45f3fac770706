//! In-memory book list for a single session.
//!
//! A [`Store`] holds the books and records every accepted add and remove in
//! an event log. [`query::filter`] derives the visible subset for a search
//! query, and a [`Shelf`] turns presentation-layer [`UiEvent`]s into new
//! state and pushes a fresh [`ShelfView`] to its subscribers.

mod aggregate;
mod book;
mod config;
mod entity;
mod error;
pub mod query;
mod shelf;
mod store;

pub use aggregate::{hydrate, Aggregate};
pub use book::{BookId, BookRecord};
pub use config::{SeedBook, ShelfConfig};
pub use entity::{Entity, EventRecord, PayloadError};
pub use error::{Result, ShelfError};
pub use shelf::{
    DraftInput, Observers, Shelf, ShelfState, ShelfView, SubscriptionId, UiEvent,
};
pub use store::{BookEvent, Store, STORE_ENTITY_ID};

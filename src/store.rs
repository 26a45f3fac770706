use tracing::{debug, trace, warn};

use crate::aggregate::{self, Aggregate};
use crate::book::{is_filled, BookId, BookRecord};
use crate::config::ShelfConfig;
use crate::entity::{Entity, EventRecord};
use crate::error::{Result, ShelfError};

const BOOK_ADDED: &str = "BookAdded";
const BOOK_REMOVED: &str = "BookRemoved";

/// Id of the entity backing every store.
pub const STORE_ENTITY_ID: &str = "shelf";

/// Events recorded by a [`Store`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookEvent {
    Added {
        id: BookId,
        title: String,
        author: String,
    },
    Removed {
        id: BookId,
    },
}

impl BookEvent {
    pub fn event_name(&self) -> &'static str {
        match self {
            BookEvent::Added { .. } => BOOK_ADDED,
            BookEvent::Removed { .. } => BOOK_REMOVED,
        }
    }
}

impl TryFrom<&EventRecord> for BookEvent {
    type Error = ShelfError;

    fn try_from(record: &EventRecord) -> Result<Self> {
        match record.event_name.as_str() {
            BOOK_ADDED => {
                let (id, title, author): (u64, String, String) = record.decode()?;
                Ok(BookEvent::Added {
                    id: BookId::new(id),
                    title,
                    author,
                })
            }
            BOOK_REMOVED => {
                let (id,): (u64,) = record.decode()?;
                Ok(BookEvent::Removed { id: BookId::new(id) })
            }
            other => Err(ShelfError::Replay {
                event: other.to_string(),
                message: "Unknown event".to_string(),
            }),
        }
    }
}

/// The session's book list.
///
/// Ids come from a counter owned by the store and are never handed out
/// twice, even after the book holding one is removed. Every accepted
/// mutation is digested into the backing [`Entity`], so a store can be
/// rebuilt with [`Store::hydrate`].
#[derive(Clone, Debug)]
pub struct Store {
    entity: Entity,
    books: Vec<BookRecord>,
    last_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Store {
            entity: Entity::with_id(STORE_ENTITY_ID),
            books: Vec::new(),
            last_id: 0,
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// A store holding the configured seed catalog.
    pub fn seeded(config: &ShelfConfig) -> Result<Store> {
        let mut store = Store::new();
        for (index, seed) in config.seed.iter().enumerate() {
            if store.add(&seed.title, &seed.author).is_none() {
                return Err(ShelfError::Config(format!(
                    "seed entry {} needs a title and an author",
                    index
                )));
            }
        }
        Ok(store)
    }

    /// Rebuild a store from its event log.
    pub fn hydrate(entity: Entity) -> Result<Store> {
        aggregate::hydrate(entity)
    }

    /// Append a new book. Returns `None` and leaves the store untouched if
    /// either field is blank.
    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>) -> Option<BookRecord> {
        let (title, author) = (title.into(), author.into());
        if !is_filled(&title) || !is_filled(&author) {
            trace!(%title, %author, "blank field, add ignored");
            return None;
        }

        let Some(next) = self.last_id.checked_add(1) else {
            warn!(last_id = self.last_id, "id space exhausted, add ignored");
            return None;
        };
        let id = BookId::new(next);
        if let Err(err) = self
            .entity
            .digest(BOOK_ADDED, &(id.get(), title.as_str(), author.as_str()))
        {
            warn!(%id, %err, "could not record add");
            return None;
        }

        let record = BookRecord::new(id, title, author);
        self.apply_added(record.clone());
        debug!(%id, title = record.title(), author = record.author(), "book added");
        Some(record)
    }

    /// Remove the book with `id`. An unknown id is not an error.
    pub fn remove(&mut self, id: BookId) -> Option<BookRecord> {
        let Some(index) = self.position(id) else {
            trace!(%id, "no such book, remove ignored");
            return None;
        };

        if let Err(err) = self.entity.digest(BOOK_REMOVED, &(id.get(),)) {
            warn!(%id, %err, "could not record remove");
            return None;
        }

        debug!(%id, "book removed");
        Some(self.books.remove(index))
    }

    pub fn list(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn get(&self, id: BookId) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.id() == id)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The most recently assigned id, if any.
    pub fn last_id(&self) -> Option<BookId> {
        (self.last_id > 0).then(|| BookId::new(self.last_id))
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }

    fn apply_added(&mut self, record: BookRecord) {
        self.last_id = self.last_id.max(record.id().get());
        self.books.push(record);
    }
}

impl Aggregate for Store {
    type ReplayError = ShelfError;

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn replay_event(&mut self, event: &EventRecord) -> Result<()> {
        let replay_error = |message: String| ShelfError::Replay {
            event: event.event_name.clone(),
            message,
        };

        let book_event = BookEvent::try_from(event).map_err(|err| match err {
            ShelfError::Payload(message) => replay_error(message),
            other => other,
        })?;

        match book_event {
            BookEvent::Added { id, title, author } => {
                if id.get() <= self.last_id {
                    return Err(replay_error(format!("id {} was already assigned", id)));
                }
                self.apply_added(BookRecord::new(id, title, author));
            }
            BookEvent::Removed { id } => {
                let index = self
                    .position(id)
                    .ok_or_else(|| replay_error(format!("book {} is not on the shelf", id)))?;
                self.books.remove(index);
            }
        }
        Ok(())
    }
}

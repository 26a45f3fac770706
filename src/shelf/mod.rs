mod observer;
mod state;
mod view;

pub use observer::{Observers, SubscriptionId};
pub use state::{DraftInput, ShelfState, UiEvent};
pub use view::ShelfView;

use std::fmt;

use tracing::{debug, warn};

use crate::config::ShelfConfig;
use crate::error::Result;
use crate::store::Store;

/// One user's session: the current state plus whoever is watching it.
///
/// Every [`dispatch`](Shelf::dispatch) reduces the state first and only then
/// notifies subscribers, once each, with the freshly derived view. That
/// includes events that change nothing, since the presentation layer redraws
/// after every event.
pub struct Shelf {
    state: ShelfState,
    observers: Observers,
}

impl Shelf {
    pub fn new(config: ShelfConfig) -> Result<Shelf> {
        Ok(Shelf::with_store(Store::seeded(&config)?))
    }

    pub fn with_store(store: Store) -> Shelf {
        Shelf {
            state: ShelfState::new(store),
            observers: Observers::new(),
        }
    }

    pub fn dispatch(&mut self, event: UiEvent) -> ShelfView {
        debug!(?event, "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(event);

        let view = self.state.view();
        self.observers.notify(&view);
        view
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ShelfView) + 'static,
    {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn view(&self) -> ShelfView {
        self.state.view()
    }

    pub fn state(&self) -> &ShelfState {
        &self.state
    }

    pub fn store(&self) -> &Store {
        self.state.store()
    }
}

impl Default for Shelf {
    fn default() -> Self {
        Shelf::new(ShelfConfig::default()).unwrap_or_else(|err| {
            warn!(%err, "default catalog rejected, starting empty");
            Shelf::with_store(Store::new())
        })
    }
}

impl fmt::Debug for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shelf")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

use tracing::trace;

use crate::entity::{Entity, EventRecord};
use crate::error::{Result, ShelfError};

/// State that is rebuilt by replaying its entity's event log.
pub trait Aggregate: Sized + Default {
    type ReplayError: Into<ShelfError>;

    fn new_empty() -> Self {
        Self::default()
    }
    fn entity(&self) -> &Entity;
    fn entity_mut(&mut self) -> &mut Entity;
    fn replay_event(&mut self, event: &EventRecord) -> std::result::Result<(), Self::ReplayError>;
}

/// Hydrate an aggregate from an entity by replaying its events.
pub fn hydrate<A: Aggregate>(entity: Entity) -> Result<A> {
    let mut agg = A::new_empty();
    *agg.entity_mut() = entity;

    let events = agg.entity().events().to_vec();
    trace!(id = agg.entity().id(), events = events.len(), "replaying");

    agg.entity_mut().set_replaying(true);
    for event in &events {
        if let Err(err) = agg.replay_event(event) {
            agg.entity_mut().set_replaying(false);
            return Err(err.into());
        }
    }
    agg.entity_mut().set_replaying(false);

    Ok(agg)
}

//! Pure state transitions
//!
//! One transition function shared by every domain store. Fetch outcomes
//! replace their field wholesale; mutating outcomes locate their target by
//! id equality. A rejected operation leaves the targeted field untouched:
//! stale-but-present data is preferred over clearing it.

use crate::event::{OpOutcome, StoreEvent};
use crate::state::ResourceState;
use crate::traits::Resource;

/// Apply one event, producing the next state
pub fn apply<T: Resource>(mut state: ResourceState<T>, event: StoreEvent<T>) -> ResourceState<T> {
    match event {
        StoreEvent::Pending { request_id } => {
            state.pending.insert(request_id);
            state.error = None;
        }
        StoreEvent::Rejected { request_id, error } => {
            state.pending.remove(&request_id);
            state.error = Some(error);
        }
        StoreEvent::Fulfilled {
            request_id,
            outcome,
        } => {
            state.pending.remove(&request_id);
            apply_outcome(&mut state, outcome);
        }
        StoreEvent::ClearSelected => {
            state.selected = None;
            state.error = None;
        }
        StoreEvent::ClearError => {
            state.error = None;
        }
        StoreEvent::ClearSearchResults => {
            state.search_results = None;
        }
    }
    state
}

fn apply_outcome<T: Resource>(state: &mut ResourceState<T>, outcome: OpOutcome<T>) {
    match outcome {
        OpOutcome::Listed(items) => {
            state.items = items;
        }
        OpOutcome::Fetched(entity) => {
            state.selected = Some(entity);
        }
        OpOutcome::Created(entity) => {
            state.items.push(entity);
        }
        OpOutcome::CreatedMany(entities) => {
            state.items.extend(entities);
        }
        OpOutcome::Updated(entity) => {
            // no matching id: the collection stays untouched
            if let Some(index) = state.items.iter().position(|e| e.id() == entity.id()) {
                state.items[index] = entity;
            }
        }
        OpOutcome::Removed(id) => {
            // removes at most one element; a miss is a no-op
            if let Some(index) = state.items.iter().position(|e| e.id() == id) {
                state.items.remove(index);
            }
        }
        OpOutcome::Searched(items) => {
            state.search_results = Some(items);
        }
        OpOutcome::AuxiliaryLoaded { name, rows } => {
            state.auxiliary.insert(name, rows);
        }
    }
}

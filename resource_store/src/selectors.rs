//! Read-only accessors over store state
//!
//! Pure functions of the current snapshot; no side effects, no caching
//! beyond what the store already holds. UI consumers read through these
//! instead of reaching into `ResourceState` fields.

use api_client::ApiError;

use crate::state::ResourceState;
use crate::traits::Resource;

pub fn items<T: Resource>(state: &ResourceState<T>) -> &[T] {
    &state.items
}

pub fn selected<T: Resource>(state: &ResourceState<T>) -> Option<&T> {
    state.selected.as_ref()
}

pub fn search_results<T: Resource>(state: &ResourceState<T>) -> Option<&[T]> {
    state.search_results.as_deref()
}

pub fn auxiliary<'a, T: Resource>(
    state: &'a ResourceState<T>,
    name: &str,
) -> Option<&'a [serde_json::Value]> {
    state.auxiliary.get(name).map(|rows| rows.as_slice())
}

pub fn loading<T: Resource>(state: &ResourceState<T>) -> bool {
    state.loading()
}

pub fn error<T: Resource>(state: &ResourceState<T>) -> Option<&ApiError> {
    state.error.as_ref()
}

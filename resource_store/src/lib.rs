//! Resource Store - Core client-side cache layer for Kinderstore
//!
//! This crate provides the foundational types for the asynchronous
//! resource-store pattern: per-domain cached collections, the request
//! lifecycle reducer, read-only selectors, and the generic domain store
//! engine that binds the REST client to the lifecycle machinery.

pub mod event;
pub mod generic_store;
pub mod handle;
pub mod prelude;
pub mod reducer;
pub mod selectors;
pub mod state;
pub mod traits;

pub use event::{OpOutcome, StoreEvent};
pub use generic_store::DomainStore;
pub use handle::StoreHandle;
pub use state::ResourceState;
pub use traits::{Resource, ResourceActions};

//! Trait definitions
//!
//! This module defines core traits for resource domains.

use std::fmt::{Debug, Display};

use api_client::{ApiError, RequestBody};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// Trait implemented by every cached domain entity
pub trait Resource: Clone + Send + Sync + Debug + Serialize + DeserializeOwned + 'static {
    /// The id type used for this entity (integer or string)
    type Id: Clone + Send + Sync + Debug + Display + PartialEq;

    /// Stable id, unique within the domain; store mutations locate their
    /// target by id equality
    fn id(&self) -> Self::Id;

    /// Collection path segment on the REST API (e.g. "appointments")
    fn resource_name() -> &'static str;
}

/// Trait that defines the standard operations every domain store exposes
#[async_trait]
pub trait ResourceActions: Send + Sync {
    /// The entity type this store caches
    type Model: Resource;

    /// Fetch the full collection, replacing the cached list wholesale
    async fn fetch_all(&self) -> Result<Vec<Self::Model>, ApiError>;

    /// Fetch a single entity into the selected slot
    async fn fetch_by_id(
        &self,
        id: &<Self::Model as Resource>::Id,
    ) -> Result<Self::Model, ApiError>;

    /// Create an entity; the server's authoritative object is appended to
    /// the cached list
    async fn create(&self, body: RequestBody) -> Result<Self::Model, ApiError>;

    /// Replace an entity in full; the cached element with a matching id is
    /// swapped in place
    async fn update(
        &self,
        id: &<Self::Model as Resource>::Id,
        body: RequestBody,
    ) -> Result<Self::Model, ApiError>;

    /// Delete an entity; the cached element with the submitted id is dropped
    async fn remove(&self, id: &<Self::Model as Resource>::Id) -> Result<(), ApiError>;

    /// Query-filtered fetch into the search results cache.
    ///
    /// Empty or whitespace-only queries are treated as "reset to full list"
    /// and fall back to `fetch_all` without a search network call.
    async fn search(&self, query: &str) -> Result<Vec<Self::Model>, ApiError>;
}

//! Generic store actions
//!
//! This module binds the REST client to the lifecycle engine: every action
//! creator dispatches exactly one network call through the Pending ->
//! settle state machine. The bearer-token precondition is checked inside
//! the dispatched future so that its failure lands in the store's error
//! field like any other rejection.

use async_trait::async_trait;

use api_client::{ApiError, RequestBody};
use dispatch_system::Operation;

use super::core::DomainStore;
use crate::event::OpOutcome;
use crate::traits::{Resource, ResourceActions};

#[async_trait]
impl<T: Resource> ResourceActions for DomainStore<T> {
    type Model = T;

    async fn fetch_all(&self) -> Result<Vec<T>, ApiError> {
        self.handle
            .dispatch(Operation::List, async {
                let token = self.session.bearer()?;
                let items = self.api.list::<T>(T::resource_name(), &token).await?;
                Ok((OpOutcome::Listed(items.clone()), items))
            })
            .await
    }

    async fn fetch_by_id(&self, id: &T::Id) -> Result<T, ApiError> {
        self.handle
            .dispatch(Operation::Get, async {
                let token = self.session.bearer()?;
                let entity = self
                    .api
                    .get_by_id::<T>(T::resource_name(), &id.to_string(), &token)
                    .await?;
                Ok((OpOutcome::Fetched(entity.clone()), entity))
            })
            .await
    }

    async fn create(&self, body: RequestBody) -> Result<T, ApiError> {
        self.handle
            .dispatch(Operation::Create, async {
                let token = self.session.bearer()?;
                let created = self
                    .api
                    .create::<T>(T::resource_name(), body, &token)
                    .await?;
                Ok((OpOutcome::Created(created.clone()), created))
            })
            .await
    }

    async fn update(&self, id: &T::Id, body: RequestBody) -> Result<T, ApiError> {
        self.handle
            .dispatch(Operation::Update, async {
                let token = self.session.bearer()?;
                let updated = self
                    .api
                    .update::<T>(T::resource_name(), &id.to_string(), body, &token)
                    .await?;
                Ok((OpOutcome::Updated(updated.clone()), updated))
            })
            .await
    }

    async fn remove(&self, id: &T::Id) -> Result<(), ApiError> {
        self.handle
            .dispatch(Operation::Remove, async {
                let token = self.session.bearer()?;
                self.api
                    .remove(T::resource_name(), &id.to_string(), &token)
                    .await?;
                Ok((OpOutcome::Removed(id.clone()), ()))
            })
            .await
    }

    async fn search(&self, query: &str) -> Result<Vec<T>, ApiError> {
        // blank queries reset to the full list instead of hitting search
        if query.trim().is_empty() {
            return self.fetch_all().await;
        }

        self.handle
            .dispatch(Operation::Search, async {
                let token = self.session.bearer()?;
                let found = self
                    .api
                    .search::<T>(T::resource_name(), query, &token)
                    .await?;
                Ok((OpOutcome::Searched(found.clone()), found))
            })
            .await
    }
}

impl<T: Resource> DomainStore<T> {
    /// Fetch a named related-entity list (e.g. the doctors needed by the
    /// appointment form) into this store's auxiliary cache
    pub async fn fetch_auxiliary(
        &self,
        name: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        let name = name.to_string();
        self.handle
            .dispatch(Operation::Auxiliary, async {
                let token = self.session.bearer()?;
                let rows = self
                    .api
                    .get_at::<serde_json::Value>(path, query, &token)
                    .await?;
                Ok((
                    OpOutcome::AuxiliaryLoaded {
                        name,
                        rows: rows.clone(),
                    },
                    rows,
                ))
            })
            .await
    }

    /// Bulk create against a nested collection endpoint; every created
    /// entity is appended to the cached list in response order
    pub async fn create_batch(&self, path: &str, body: RequestBody) -> Result<Vec<T>, ApiError> {
        self.handle
            .dispatch(Operation::CreateBatch, async {
                let token = self.session.bearer()?;
                let created = self.api.create_at::<Vec<T>>(path, body, &token).await?;
                Ok((OpOutcome::CreatedMany(created.clone()), created))
            })
            .await
    }
}

//! Store state container
//!
//! `StoreHandle` holds the live `ResourceState` behind a lock over an `Arc`
//! snapshot. Readers clone the `Arc` and never observe a torn intermediate
//! state; every mutation runs the reducer and replaces the snapshot in full.

use std::future::Future;
use std::sync::{Arc, RwLock};

use api_client::ApiError;
use dispatch_system::{ActionEvent, DispatchManager, Operation, Phase, RequestId};

use crate::event::{OpOutcome, StoreEvent};
use crate::reducer;
use crate::state::ResourceState;
use crate::traits::Resource;

pub struct StoreHandle<T: Resource> {
    state: RwLock<Arc<ResourceState<T>>>,
    dispatch_manager: Option<Arc<DispatchManager>>,
}

impl<T: Resource> std::fmt::Debug for StoreHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandle")
            .field("resource", &T::resource_name())
            .field("has_dispatch_manager", &self.dispatch_manager.is_some())
            .finish()
    }
}

impl<T: Resource> StoreHandle<T> {
    pub fn new(dispatch_manager: Option<Arc<DispatchManager>>) -> Self {
        Self {
            state: RwLock::new(Arc::new(ResourceState::default())),
            dispatch_manager,
        }
    }

    /// Current state snapshot; cheap to take, immutable once taken
    pub fn snapshot(&self) -> Arc<ResourceState<T>> {
        self.state
            .read()
            .map(|guard| Arc::clone(&guard))
            .unwrap_or_default()
    }

    /// Apply one event through the reducer, replacing the snapshot
    pub fn apply(&self, event: StoreEvent<T>) {
        if let Ok(mut guard) = self.state.write() {
            let next = reducer::apply((**guard).clone(), event);
            *guard = Arc::new(next);
        }
    }

    /// Run one operation through the Pending -> settle lifecycle.
    ///
    /// Pending applies synchronously before the future is polled. Exactly
    /// one settle event is applied when it resolves, and it is always
    /// applied: among overlapping requests touching the same field, the one
    /// that settles last wins.
    ///
    /// The future yields the store outcome together with the value handed
    /// back to the caller.
    pub async fn dispatch<F, R>(&self, operation: Operation, fut: F) -> Result<R, ApiError>
    where
        F: Future<Output = Result<(OpOutcome<T>, R), ApiError>> + Send,
        R: Send,
    {
        let request_id = RequestId::new();
        tracing::debug!(
            resource = T::resource_name(),
            operation = operation.as_str(),
            %request_id,
            "dispatching"
        );
        self.apply(StoreEvent::Pending { request_id });
        self.emit(request_id, Phase::Pending, operation, None);

        match fut.await {
            Ok((outcome, value)) => {
                self.apply(StoreEvent::Fulfilled {
                    request_id,
                    outcome,
                });
                self.emit(request_id, Phase::Fulfilled, operation, None);
                Ok(value)
            }
            Err(error) => {
                self.apply(StoreEvent::Rejected {
                    request_id,
                    error: error.clone(),
                });
                self.emit(request_id, Phase::Rejected, operation, Some(error.to_string()));
                Err(error)
            }
        }
    }

    fn emit(
        &self,
        request_id: RequestId,
        phase: Phase,
        operation: Operation,
        error: Option<String>,
    ) {
        if let Some(manager) = &self.dispatch_manager {
            let mut event = ActionEvent::new(
                request_id,
                phase,
                operation,
                T::resource_name().to_string(),
            );
            if let Some(message) = error {
                event = event.with_error(message);
            }
            manager.emit(event);
        }
    }
}

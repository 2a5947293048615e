use std::sync::Arc;

use api_client::{ApiClient, AuthSession};
use dispatch_system::DispatchManager;

use crate::event::StoreEvent;
use crate::handle::StoreHandle;
use crate::state::ResourceState;
use crate::traits::Resource;

/// Generic domain store that provides default implementations for all
/// resource operations
#[derive(Clone)]
pub struct DomainStore<T: Resource> {
    pub(crate) api: Arc<ApiClient>,
    pub(crate) session: Arc<AuthSession>,
    pub(crate) handle: Arc<StoreHandle<T>>,
}

impl<T: Resource> std::fmt::Debug for DomainStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainStore")
            .field("resource", &T::resource_name())
            .field("handle", &self.handle)
            .finish()
    }
}

impl<T: Resource> DomainStore<T> {
    pub fn new(
        api: Arc<ApiClient>,
        session: Arc<AuthSession>,
        dispatch_manager: Option<Arc<DispatchManager>>,
    ) -> Self {
        Self {
            api,
            session,
            handle: Arc::new(StoreHandle::new(dispatch_manager)),
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> Arc<ResourceState<T>> {
        self.handle.snapshot()
    }

    /// The underlying lifecycle container
    pub fn handle(&self) -> Arc<StoreHandle<T>> {
        Arc::clone(&self.handle)
    }

    pub fn clear_selected(&self) {
        self.handle.apply(StoreEvent::ClearSelected);
    }

    pub fn clear_error(&self) {
        self.handle.apply(StoreEvent::ClearError);
    }

    pub fn clear_search_results(&self) {
        self.handle.apply(StoreEvent::ClearSearchResults);
    }
}

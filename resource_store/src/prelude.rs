//! Convenience re-exports for common resource-store usage

// Core traits
pub use crate::traits::{Resource, ResourceActions};

// Store machinery
pub use crate::event::{OpOutcome, StoreEvent};
pub use crate::generic_store::DomainStore;
pub use crate::handle::StoreHandle;
pub use crate::state::ResourceState;

// Selectors as a module path
pub use crate::selectors;

// Error and payload types (re-exported from api-client)
pub use api_client::{ApiError, ErrorKind, FormPayload, RequestBody};

// Lifecycle identity (re-exported from dispatch-system)
pub use dispatch_system::{Operation, Phase, RequestId};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};

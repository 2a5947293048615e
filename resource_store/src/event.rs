//! Store events
//!
//! This module defines the typed transition inputs consumed by the reducer:
//! the request lifecycle events and the explicit clear actions.

use api_client::ApiError;
use dispatch_system::{Operation, RequestId};

use crate::traits::Resource;

/// Result payload of a fulfilled operation
#[derive(Debug, Clone)]
pub enum OpOutcome<T: Resource> {
    /// List settled: replace `items` wholesale
    Listed(Vec<T>),
    /// Get settled: set `selected`
    Fetched(T),
    /// Create settled: append the server's authoritative object
    Created(T),
    /// Bulk create settled: append every created object in response order
    CreatedMany(Vec<T>),
    /// Update settled: swap the element whose id matches the payload
    Updated(T),
    /// Remove settled: drop the element with the submitted id
    Removed(<T as Resource>::Id),
    /// Search settled: replace `search_results` wholesale
    Searched(Vec<T>),
    /// Auxiliary fetch settled: replace the named list wholesale
    AuxiliaryLoaded {
        name: String,
        rows: Vec<serde_json::Value>,
    },
}

impl<T: Resource> OpOutcome<T> {
    pub fn operation(&self) -> Operation {
        match self {
            OpOutcome::Listed(_) => Operation::List,
            OpOutcome::Fetched(_) => Operation::Get,
            OpOutcome::Created(_) => Operation::Create,
            OpOutcome::CreatedMany(_) => Operation::CreateBatch,
            OpOutcome::Updated(_) => Operation::Update,
            OpOutcome::Removed(_) => Operation::Remove,
            OpOutcome::Searched(_) => Operation::Search,
            OpOutcome::AuxiliaryLoaded { .. } => Operation::Auxiliary,
        }
    }
}

/// State transition input for the reducer
#[derive(Debug, Clone)]
pub enum StoreEvent<T: Resource> {
    /// A request was dispatched; fires synchronously at call time
    Pending { request_id: RequestId },
    /// The request resolved with a payload
    Fulfilled {
        request_id: RequestId,
        outcome: OpOutcome<T>,
    },
    /// The request failed; the targeted field is left untouched
    Rejected {
        request_id: RequestId,
        error: ApiError,
    },
    /// Reset the selected entity (also clears the error)
    ClearSelected,
    /// Reset the error field
    ClearError,
    /// Reset the search results cache
    ClearSearchResults,
}

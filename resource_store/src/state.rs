//! Store state
//!
//! This module defines the client-side cache of one resource domain.

use std::collections::{HashMap, HashSet};

use api_client::ApiError;
use dispatch_system::RequestId;

use crate::traits::Resource;

/// Cached state of one resource domain.
///
/// Created once with empty defaults at application start and alive for the
/// whole session; fields reset only through explicit clear events or a
/// fresh fetch replacing them wholesale.
#[derive(Debug, Clone)]
pub struct ResourceState<T: Resource> {
    /// Authoritative cached collection, in server response order
    pub items: Vec<T>,
    /// Entity loaded by id; lifecycle independent of `items`
    pub selected: Option<T>,
    /// Query-filtered results; never merged into `items`
    pub search_results: Option<Vec<T>>,
    /// Named related-entity lists cached to populate this domain's forms
    pub auxiliary: HashMap<String, Vec<serde_json::Value>>,
    /// Dispatched-but-unsettled requests
    pub pending: HashSet<RequestId>,
    /// Most recently surfaced failure (last-write-wins, not a queue)
    pub error: Option<ApiError>,
}

impl<T: Resource> ResourceState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one request for this store is unresolved
    pub fn loading(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl<T: Resource> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            search_results: None,
            auxiliary: HashMap::new(),
            pending: HashSet::new(),
            error: None,
        }
    }
}

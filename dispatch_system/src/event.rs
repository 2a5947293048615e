//! Lifecycle event types and definitions
//!
//! This module defines the structure of request lifecycle events
//! that flow through the dispatch system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request_id::RequestId;

/// Request lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Pending,
    Fulfilled,
    Rejected,
}

/// Store operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    List,
    Get,
    Create,
    CreateBatch,
    Update,
    Remove,
    Search,
    Auxiliary,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::CreateBatch => "create_batch",
            Operation::Update => "update",
            Operation::Remove => "remove",
            Operation::Search => "search",
            Operation::Auxiliary => "auxiliary",
        }
    }
}

/// Lifecycle notification event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEvent {
    /// Identity of the request this event belongs to
    pub request_id: RequestId,
    /// Lifecycle phase
    pub phase: Phase,
    /// Operation kind
    pub operation: Operation,
    /// Resource name (e.g. "appointments")
    pub resource: String,
    /// Error message (Rejected events only)
    pub error: Option<String>,
    /// Event timestamp (UTC)
    pub timestamp: DateTime<Utc>,
}

impl ActionEvent {
    pub fn new(request_id: RequestId, phase: Phase, operation: Operation, resource: String) -> Self {
        Self {
            request_id,
            phase,
            operation,
            resource,
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_error(mut self, message: String) -> Self {
        self.error = Some(message);
        self
    }

    /// Whether this event marks the end of its request's lifecycle
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Fulfilled | Phase::Rejected)
    }
}

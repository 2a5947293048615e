//! Shared type definitions for the dispatch system

use crate::event::ActionEvent;

/// Callback invoked for every emitted lifecycle event
pub type EventCallback = Box<dyn Fn(&ActionEvent) + Send + Sync>;

//! Dispatch system for request lifecycle handling
//!
//! This crate provides request identity and lifecycle event fan-out
//! for store operations in the Kinderstore ecosystem.

pub mod event;
pub mod manager;
pub mod prelude;
pub mod request_id;
pub mod types;

pub use event::{ActionEvent, Operation, Phase};
pub use manager::DispatchManager;
pub use request_id::RequestId;
pub use types::EventCallback;

//! Trait definitions for resource domains

pub mod core;

pub use core::{Resource, ResourceActions};

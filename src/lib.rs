//! # Kinderstore
//!
//! Client-side resource layer for the Kinderstore pediatric clinic frontend:
//! cached REST collections with request lifecycle tracking, dispatch events,
//! and one store per clinic domain.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kinderstore::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let kinderstore = KinderStore::bootstrap(&config)?;
//!
//!     // log every lifecycle transition
//!     kinderstore.dispatch_manager().add_callback(|event| {
//!         println!("{:?} {} {}", event.phase, event.resource, event.request_id);
//!     });
//!
//!     let vaccines = kinderstore.get_domain::<Vaccine>()?;
//!     vaccines.fetch_all().await?;
//!
//!     let state = vaccines.state();
//!     for vaccine in selectors::items(&state) {
//!         println!("{} ({} doses)", vaccine.name, vaccine.doses_required);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod domains;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::KinderStore;
pub use crate::errors::KinderStoreError;

// Re-export centralized config
pub use config::{ApiConfig, AppConfig, AuthConfig, DispatchConfig};

// Re-export internal crates used by the public API
pub use api_client;
pub use dispatch_system;
pub use resource_store;

// Re-export external dependencies used in public API
pub use async_trait;
pub use serde_json;

//! Convenience re-exports for common Kinderstore usage
//!
//! This prelude module re-exports the most commonly used items from the
//! Kinderstore ecosystem, making it easier to import everything you need
//! with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use kinderstore::prelude::*;
//!
//! // Now you have access to all the common Kinderstore types and traits
//! ```

// Core Kinderstore components
pub use crate::core::KinderStore;
pub use crate::errors::KinderStoreError;

// Re-export centralized config
pub use config::{ApiConfig, AppConfig, AuthConfig, DispatchConfig};

// Clinic domains
pub use crate::domains::{
    Appointment, AppointmentPayload, AppointmentStore, AppointmentStoreExt, Child, ChildPayload,
    ChildStore, Diagnosis, DiagnosisPayload, DiagnosisStore, DiagnosisStoreExt, LabRequestItem,
    LabRequestItemPayload, LabRequestItemStore, LabRequestItemStoreExt, VaccinationRecord,
    VaccinationRecordPayload, VaccinationRecordStore, VaccinationRecordStoreExt, Vaccine,
    VaccinePayload, VaccineStore,
};

// Re-export commonly used resource-store types for convenience
pub use resource_store::prelude::*;

// Re-export the API boundary
pub use api_client::prelude::*;

// Re-export the dispatch system for lifecycle observation
pub use dispatch_system::prelude::*;

// Common external dependencies
pub use async_trait;
pub use serde_json;
pub use tokio;

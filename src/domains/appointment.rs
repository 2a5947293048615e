//! Appointment domain
//!
//! Besides the standard operations, the appointment store caches the doctor
//! and child lists its booking form needs, under the auxiliary names
//! `doctors` and `children`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use api_client::{ApiError, RequestBody};
use resource_store::{DomainStore, Resource};

/// Booked appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub child: i64,
    pub doctor: i64,
    pub scheduled_for: DateTime<Utc>,
    pub reason: String,
    /// One of "scheduled", "completed", "cancelled", "no_show"
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Resource for Appointment {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn resource_name() -> &'static str {
        "appointments"
    }
}

/// Submission payload for appointment create/update
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentPayload {
    pub child: i64,
    pub doctor: i64,
    pub scheduled_for: DateTime<Utc>,
    pub reason: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AppointmentPayload {
    pub fn into_body(self) -> Result<RequestBody, ApiError> {
        RequestBody::json(&self)
    }
}

pub type AppointmentStore = DomainStore<Appointment>;

/// Domain-specific actions of the appointment store
#[async_trait]
pub trait AppointmentStoreExt {
    /// Cache the doctor list used by the booking form
    async fn fetch_doctors(&self) -> Result<Vec<serde_json::Value>, ApiError>;

    /// Cache the child list used by the booking form
    async fn fetch_children(&self) -> Result<Vec<serde_json::Value>, ApiError>;
}

#[async_trait]
impl AppointmentStoreExt for AppointmentStore {
    async fn fetch_doctors(&self) -> Result<Vec<serde_json::Value>, ApiError> {
        self.fetch_auxiliary("doctors", "doctors", &[]).await
    }

    async fn fetch_children(&self) -> Result<Vec<serde_json::Value>, ApiError> {
        self.fetch_auxiliary("children", "children", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_utc_schedule() {
        let body = AppointmentPayload {
            child: 3,
            doctor: 9,
            scheduled_for: DateTime::parse_from_rfc3339("2026-03-02T09:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            reason: "U7 checkup".to_string(),
            status: "scheduled".to_string(),
            notes: None,
        }
        .into_body()
        .unwrap();

        match body {
            RequestBody::Json(value) => {
                assert_eq!(value["child"], 3);
                assert_eq!(value["doctor"], 9);
                assert!(value.get("notes").is_none());
                assert!(value["scheduled_for"]
                    .as_str()
                    .unwrap()
                    .starts_with("2026-03-02T09:30:00"));
            }
            RequestBody::Form(_) => panic!("appointment payloads are plain JSON"),
        }
    }
}

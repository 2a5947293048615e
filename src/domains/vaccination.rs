//! Vaccination record domain
//!
//! Carries two extras on top of the standard operations: the due-vaccination
//! report for a child (cached under the auxiliary name `due`) and a bulk
//! endpoint for recording several administered doses in one submission.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use api_client::{ApiError, RequestBody};
use resource_store::{DomainStore, Resource};

/// Administered vaccine dose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationRecord {
    pub id: i64,
    pub child: i64,
    pub vaccine: i64,
    pub dose_number: i32,
    pub administered_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administered_by: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Resource for VaccinationRecord {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn resource_name() -> &'static str {
        "vaccination-records"
    }
}

/// Submission payload for vaccination record create/update
#[derive(Debug, Clone, Serialize)]
pub struct VaccinationRecordPayload {
    pub child: i64,
    pub vaccine: i64,
    pub dose_number: i32,
    pub administered_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administered_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VaccinationRecordPayload {
    pub fn into_body(self) -> Result<RequestBody, ApiError> {
        RequestBody::json(&self)
    }
}

pub type VaccinationRecordStore = DomainStore<VaccinationRecord>;

/// Domain-specific actions of the vaccination record store
#[async_trait]
pub trait VaccinationRecordStoreExt {
    /// Cache the due-vaccination report for one child under the auxiliary
    /// name `due`
    async fn fetch_due(&self, child_id: i64) -> Result<Vec<serde_json::Value>, ApiError>;

    /// Record several administered doses in one submission; every created
    /// record is appended to the cached list
    async fn record_batch(
        &self,
        entries: Vec<VaccinationRecordPayload>,
    ) -> Result<Vec<VaccinationRecord>, ApiError>;
}

#[async_trait]
impl VaccinationRecordStoreExt for VaccinationRecordStore {
    async fn fetch_due(&self, child_id: i64) -> Result<Vec<serde_json::Value>, ApiError> {
        let child = child_id.to_string();
        self.fetch_auxiliary("due", "vaccination-records/due", &[("child", child.as_str())])
            .await
    }

    async fn record_batch(
        &self,
        entries: Vec<VaccinationRecordPayload>,
    ) -> Result<Vec<VaccinationRecord>, ApiError> {
        let body = RequestBody::json(&entries)?;
        self.create_batch("vaccination-records/bulk", body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_payload_serializes_as_array() {
        let entries = vec![
            VaccinationRecordPayload {
                child: 3,
                vaccine: 7,
                dose_number: 1,
                administered_on: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
                administered_by: Some(9),
                notes: None,
            },
            VaccinationRecordPayload {
                child: 3,
                vaccine: 8,
                dose_number: 2,
                administered_on: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
                administered_by: None,
                notes: Some("left arm".to_string()),
            },
        ];

        let value = serde_json::to_value(&entries).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].get("notes").is_none());
        assert_eq!(rows[1]["notes"], "left arm");
    }
}

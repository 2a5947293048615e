//! Lab request item domain

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use api_client::{ApiError, RequestBody};
use resource_store::{DomainStore, Resource};

/// Requested laboratory test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabRequestItem {
    pub id: i64,
    pub child: i64,
    pub test_name: String,
    /// One of "requested", "collected", "completed", "cancelled"
    pub status: String,
    pub requested_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_summary: Option<String>,
}

impl Resource for LabRequestItem {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn resource_name() -> &'static str {
        "lab-request-items"
    }
}

/// Submission payload for lab request create/update
#[derive(Debug, Clone, Serialize)]
pub struct LabRequestItemPayload {
    pub child: i64,
    pub test_name: String,
    pub status: String,
    pub requested_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_summary: Option<String>,
}

impl LabRequestItemPayload {
    pub fn into_body(self) -> Result<RequestBody, ApiError> {
        RequestBody::json(&self)
    }
}

pub type LabRequestItemStore = DomainStore<LabRequestItem>;

/// Domain-specific actions of the lab request store
#[async_trait]
pub trait LabRequestItemStoreExt {
    /// Cache the clinic-wide outstanding-request report under the auxiliary
    /// name `pending`
    async fn fetch_pending_report(&self) -> Result<Vec<serde_json::Value>, ApiError>;
}

#[async_trait]
impl LabRequestItemStoreExt for LabRequestItemStore {
    async fn fetch_pending_report(&self) -> Result<Vec<serde_json::Value>, ApiError> {
        self.fetch_auxiliary("pending", "lab-request-items/pending", &[])
            .await
    }
}

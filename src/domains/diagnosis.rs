//! Diagnosis domain

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use api_client::{ApiError, RequestBody};
use resource_store::{DomainStore, Resource, ResourceActions};

/// Recorded diagnosis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub id: i64,
    pub child: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment: Option<i64>,
    /// ICD-10 code
    pub code: String,
    pub description: String,
    pub diagnosed_on: NaiveDate,
}

impl Resource for Diagnosis {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn resource_name() -> &'static str {
        "diagnoses"
    }
}

/// Submission payload for diagnosis create/update
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisPayload {
    pub child: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<i64>,
    pub code: String,
    pub description: String,
    pub diagnosed_on: NaiveDate,
}

impl DiagnosisPayload {
    pub fn into_body(self) -> Result<RequestBody, ApiError> {
        RequestBody::json(&self)
    }
}

pub type DiagnosisStore = DomainStore<Diagnosis>;

/// Domain-specific actions of the diagnosis store
#[async_trait]
pub trait DiagnosisStoreExt {
    /// Search the diagnosis history of one child
    async fn search_by_child(&self, child_id: i64) -> Result<Vec<Diagnosis>, ApiError>;
}

#[async_trait]
impl DiagnosisStoreExt for DiagnosisStore {
    async fn search_by_child(&self, child_id: i64) -> Result<Vec<Diagnosis>, ApiError> {
        self.search(&child_id.to_string()).await
    }
}

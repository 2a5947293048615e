//! Vaccine catalog domain

use serde::{Deserialize, Serialize};

use api_client::{ApiError, RequestBody};
use resource_store::{DomainStore, Resource};

/// Vaccine catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaccine {
    pub id: i64,
    pub name: String,
    pub doses_required: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_age_months: Option<i32>,
    pub is_active: bool,
}

impl Resource for Vaccine {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn resource_name() -> &'static str {
        "vaccines"
    }
}

/// Submission payload for vaccine create/update
#[derive(Debug, Clone, Serialize)]
pub struct VaccinePayload {
    pub name: String,
    pub doses_required: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_age_months: Option<i32>,
    pub is_active: bool,
}

impl VaccinePayload {
    pub fn into_body(self) -> Result<RequestBody, ApiError> {
        RequestBody::json(&self)
    }
}

pub type VaccineStore = DomainStore<Vaccine>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_omits_absent_age_recommendation() {
        let body = VaccinePayload {
            name: "DTaP".to_string(),
            doses_required: 3,
            recommended_age_months: None,
            is_active: true,
        }
        .into_body()
        .unwrap();

        match body {
            RequestBody::Json(value) => {
                assert_eq!(value["name"], "DTaP");
                assert_eq!(value["doses_required"], 3);
                assert!(value.get("recommended_age_months").is_none());
            }
            RequestBody::Form(_) => panic!("vaccine payloads are plain JSON"),
        }
    }

    #[test]
    fn entity_round_trips_through_json() {
        let body = r#"{"id":7,"name":"DTaP","doses_required":3,"is_active":true}"#;
        let vaccine: Vaccine = serde_json::from_str(body).unwrap();
        assert_eq!(vaccine.id(), 7);
        assert_eq!(vaccine.recommended_age_months, None);
    }
}

//! Child (patient) domain
//!
//! The one domain whose submissions may carry a binary attachment: when a
//! profile photo is present the payload travels as multipart form data,
//! otherwise as a plain form without the part. Either way, empty fields are
//! omitted rather than sent as empty strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use api_client::{FormPayload, RequestBody};
use resource_store::{DomainStore, Resource};

/// Registered patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    pub guardian_name: String,
    pub guardian_phone: String,
    /// Server-side URL of the uploaded profile photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Resource for Child {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn resource_name() -> &'static str {
        "children"
    }
}

/// Submission payload for child create/update
#[derive(Debug, Clone, Default)]
pub struct ChildPayload {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: String,
    pub blood_type: Option<String>,
    pub allergies: Option<String>,
    pub guardian_name: String,
    pub guardian_phone: String,
    /// Raw JPEG/PNG bytes of a new profile photo, if one was picked
    pub photo: Option<Vec<u8>>,
}

impl ChildPayload {
    pub fn into_body(self) -> RequestBody {
        let form = FormPayload::new()
            .text("first_name", self.first_name)
            .text("last_name", self.last_name)
            .maybe_text(
                "date_of_birth",
                self.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()),
            )
            .text("gender", self.gender)
            .maybe_text("blood_type", self.blood_type)
            .maybe_text("allergies", self.allergies)
            .text("guardian_name", self.guardian_name)
            .text("guardian_phone", self.guardian_phone)
            .maybe_file("photo", "photo.jpg", "image/jpeg", self.photo);

        RequestBody::Form(form)
    }
}

pub type ChildStore = DomainStore<Child>;

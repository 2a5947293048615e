//! Clinic domain configurations
//!
//! One module per server resource: the entity type, its submission payload,
//! and any domain-specific store actions layered over the generic engine.

pub mod appointment;
pub mod child;
pub mod diagnosis;
pub mod lab_request;
pub mod vaccination;
pub mod vaccine;

pub use appointment::{Appointment, AppointmentPayload, AppointmentStore, AppointmentStoreExt};
pub use child::{Child, ChildPayload, ChildStore};
pub use diagnosis::{Diagnosis, DiagnosisPayload, DiagnosisStore, DiagnosisStoreExt};
pub use lab_request::{
    LabRequestItem, LabRequestItemPayload, LabRequestItemStore, LabRequestItemStoreExt,
};
pub use vaccination::{
    VaccinationRecord, VaccinationRecordPayload, VaccinationRecordStore, VaccinationRecordStoreExt,
};
pub use vaccine::{Vaccine, VaccinePayload, VaccineStore};

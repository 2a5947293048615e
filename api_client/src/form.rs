//! Typed submission payloads
//!
//! Entity submissions are assembled field by field into a `FormPayload`.
//! Fields whose value is absent or empty are omitted from the submitted
//! form, never sent as empty strings. Payloads without binary parts can
//! also travel as plain JSON via `RequestBody::Json`.

use serde::Serialize;

use crate::errors::ApiError;

/// A single named field of a form submission
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Text(String),
    Part {
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

/// Ordered form field collection applying the omit-empty rule
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(String, FormField)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field; empty values are skipped
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.fields.push((name.to_string(), FormField::Text(value)));
        }
        self
    }

    /// Add an optional text field; `None` and empty values are skipped
    pub fn maybe_text(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    /// Add a binary part (e.g. a profile photo)
    pub fn file(mut self, name: &str, file_name: &str, mime: &str, bytes: Vec<u8>) -> Self {
        self.fields.push((
            name.to_string(),
            FormField::Part {
                file_name: file_name.to_string(),
                mime: mime.to_string(),
                bytes,
            },
        ));
        self
    }

    /// Add an optional binary part; `None` is skipped
    pub fn maybe_file(
        self,
        name: &str,
        file_name: &str,
        mime: &str,
        bytes: Option<Vec<u8>>,
    ) -> Self {
        match bytes {
            Some(bytes) => self.file(name, file_name, mime, bytes),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether any field is a binary part
    pub fn has_parts(&self) -> bool {
        self.fields
            .iter()
            .any(|(_, field)| matches!(field, FormField::Part { .. }))
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub(crate) fn into_multipart(self) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, field) in self.fields {
            form = match field {
                FormField::Text(value) => form.text(name, value),
                FormField::Part {
                    file_name,
                    mime,
                    bytes,
                } => {
                    let part = reqwest::multipart::Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&mime)
                        .map_err(|e| ApiError::Client(format!("invalid mime type: {}", e)))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

/// Body of a create/update submission
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(serde_json::Value),
    Form(FormPayload),
}

impl RequestBody {
    /// Serialize a typed payload as a JSON body
    pub fn json<T: Serialize>(payload: &T) -> Result<Self, ApiError> {
        serde_json::to_value(payload)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Client(format!("payload serialization: {}", e)))
    }
}

impl From<FormPayload> for RequestBody {
    fn from(form: FormPayload) -> Self {
        RequestBody::Form(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_omitted() {
        let form = FormPayload::new()
            .text("first_name", "Mara")
            .text("allergies", "")
            .maybe_text("blood_type", None::<String>)
            .maybe_text("notes", Some(""));

        assert_eq!(form.field_names(), vec!["first_name"]);
    }

    #[test]
    fn populated_optionals_are_kept_in_order() {
        let form = FormPayload::new()
            .text("name", "DTaP")
            .text("doses_required", 3.to_string())
            .maybe_text("notes", Some("second batch"));

        assert_eq!(form.field_names(), vec!["name", "doses_required", "notes"]);
    }

    #[test]
    fn file_part_marks_payload_multipart() {
        let without = FormPayload::new().text("first_name", "Mara");
        assert!(!without.has_parts());

        let with = without
            .clone()
            .maybe_file("photo", "photo.jpg", "image/jpeg", Some(vec![0xff, 0xd8]));
        assert!(with.has_parts());
        assert_eq!(with.len(), 2);

        let skipped = without.maybe_file("photo", "photo.jpg", "image/jpeg", None);
        assert!(!skipped.has_parts());
    }
}

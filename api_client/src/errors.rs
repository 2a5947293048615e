//! Error types for the API client
//!
//! Every transport or server failure is normalized into `ApiError` before
//! it leaves this crate; stores surface these values verbatim to the UI.

use thiserror::Error;

/// Category of a normalized API failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required bearer token missing; raised before any network call
    Unauthenticated,
    /// No response reached the server (connectivity, DNS, timeout)
    Network,
    /// Response received with a non-success status
    Server,
    /// Malformed request construction or undecodable response
    Client,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("authentication required: no bearer token in session")]
    Unauthenticated,

    #[error("network error: {0}")]
    Network(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("request error: {0}")]
    Client(String),
}

impl ApiError {
    /// Build a `Server` error from a response status and raw body,
    /// extracting the display message per the body-shape priority rule.
    pub fn server(status: u16, body: &str) -> Self {
        ApiError::Server {
            status,
            message: extract_server_message(body),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unauthenticated => ErrorKind::Unauthenticated,
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Server { .. } => ErrorKind::Server,
            ApiError::Client(_) => ErrorKind::Client,
        }
    }

    /// HTTP status code, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Extract a display message from a server error body.
///
/// Priority order: a `detail` field, then a `message` field, then the
/// body itself.
pub(crate) fn extract_server_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|v| v.as_str()) {
            return detail.to_string();
        }
        if let Some(message) = value.get("message").and_then(|v| v.as_str()) {
            return message.to_string();
        }
    }
    body.trim().to_string()
}

/// Map a transport-layer failure onto the error taxonomy.
pub(crate) fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_builder() {
        ApiError::Client(e.to_string())
    } else if e.is_decode() {
        ApiError::Client(format!("response decode: {}", e))
    } else {
        // connect, DNS, timeout: no usable response reached us
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_takes_priority() {
        let body = r#"{"detail": "appointment not found", "message": "ignored"}"#;
        assert_eq!(extract_server_message(body), "appointment not found");
    }

    #[test]
    fn message_field_is_second_choice() {
        let body = r#"{"message": "invalid dose number"}"#;
        assert_eq!(extract_server_message(body), "invalid dose number");
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(extract_server_message("Bad Gateway"), "Bad Gateway");
        // JSON without either field also falls through
        assert_eq!(
            extract_server_message(r#"{"code": 42}"#),
            r#"{"code": 42}"#
        );
    }

    #[test]
    fn server_error_carries_status_and_message() {
        let err = ApiError::server(404, r#"{"detail": "no such child"}"#);
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "server error (404): no such child");
    }

    #[test]
    fn unauthenticated_has_no_status() {
        assert_eq!(ApiError::Unauthenticated.status(), None);
        assert_eq!(ApiError::Unauthenticated.kind(), ErrorKind::Unauthenticated);
    }
}

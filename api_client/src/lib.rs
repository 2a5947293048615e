//! API Client - REST boundary layer for Kinderstore
//!
//! This crate provides the authenticated HTTP resource client, the bearer
//! token session, normalized error types, and the typed form payload
//! serializer used for entity submission.

pub mod auth;
pub mod client;
pub mod errors;
pub mod form;
pub mod prelude;

pub use auth::AuthSession;
pub use client::ApiClient;
pub use errors::{ApiError, ErrorKind};
pub use form::{FormField, FormPayload, RequestBody};

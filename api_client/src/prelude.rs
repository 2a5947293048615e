//! Convenience re-exports for common api-client usage

pub use crate::auth::AuthSession;
pub use crate::client::ApiClient;
pub use crate::errors::{ApiError, ErrorKind};
pub use crate::form::{FormField, FormPayload, RequestBody};

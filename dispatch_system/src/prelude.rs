//! Convenience re-exports for common dispatch-system usage

pub use crate::event::{ActionEvent, Operation, Phase};
pub use crate::manager::DispatchManager;
pub use crate::request_id::RequestId;
pub use crate::types::EventCallback;

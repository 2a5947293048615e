//! Error types for the Kinderstore crate
//!
//! This module contains all error types that can be returned by KinderStore
//! coordination operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KinderStoreError {
    #[error("API client error: {0}")]
    Api(#[from] api_client::ApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Store object not found: {0}")]
    StoreNotFound(String),

    #[error("Store object already registered: {0}")]
    StoreAlreadyRegistered(String),
}

//! Bearer token session
//!
//! This module holds the session's bearer token. Every resource operation
//! requires one; `bearer()` raises the precondition failure before any
//! network call when the token is absent.

use std::sync::RwLock;

use config::AuthConfig;

use crate::errors::ApiError;

#[derive(Debug, Default)]
pub struct AuthSession {
    token: RwLock<Option<String>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Read the token from the configured environment variable, if present
    pub fn from_env(config: &AuthConfig) -> Self {
        Self {
            token: RwLock::new(std::env::var(&config.token_env).ok()),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().map(|g| g.is_some()).unwrap_or(false)
    }

    /// Current bearer token, or the `Unauthenticated` precondition failure
    pub fn bearer(&self) -> Result<String, ApiError> {
        match self.token.read() {
            Ok(guard) => guard.clone().ok_or(ApiError::Unauthenticated),
            Err(_) => Err(ApiError::Unauthenticated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_is_unauthenticated() {
        let session = AuthSession::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), Err(ApiError::Unauthenticated));
    }

    #[test]
    fn set_and_clear_token() {
        let session = AuthSession::new();
        session.set_token("abc123");
        assert_eq!(session.bearer().unwrap(), "abc123");

        session.clear();
        assert_eq!(session.bearer(), Err(ApiError::Unauthenticated));
    }
}

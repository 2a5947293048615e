use config::DispatchConfig;

use crate::event::ActionEvent;
use crate::types::EventCallback;

/// Dispatch manager for lifecycle event notifications
pub struct DispatchManager {
    callbacks: std::sync::RwLock<Vec<EventCallback>>,
    config: DispatchConfig,
}

impl std::fmt::Debug for DispatchManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchManager")
            .field("callback_count", &self.callback_count())
            .field("config", &self.config)
            .finish()
    }
}

impl DispatchManager {
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    pub fn with_config(config: DispatchConfig) -> Self {
        Self {
            callbacks: std::sync::RwLock::new(Vec::new()),
            config,
        }
    }

    /// Add event callback
    pub fn add_callback<F>(&self, callback: F)
    where
        F: Fn(&ActionEvent) + Send + Sync + 'static,
    {
        if let Ok(mut callbacks) = self.callbacks.write() {
            if callbacks.len() >= self.config.max_callbacks {
                tracing::warn!(
                    max_callbacks = self.config.max_callbacks,
                    "dispatch callback limit reached, dropping subscriber"
                );
                return;
            }
            callbacks.push(Box::new(callback));
        }
    }

    /// Emit event to all subscribers
    pub fn emit(&self, event: ActionEvent) {
        if self.config.log_events {
            tracing::debug!(
                request_id = %event.request_id,
                resource = %event.resource,
                operation = event.operation.as_str(),
                phase = ?event.phase,
                "dispatch event"
            );
        }
        if let Ok(callbacks) = self.callbacks.read() {
            for callback in callbacks.iter() {
                callback(&event);
            }
        }
    }

    /// Clear all callbacks
    pub fn clear_callbacks(&self) {
        if let Ok(mut callbacks) = self.callbacks.write() {
            callbacks.clear();
        }
    }

    /// Get number of registered callbacks
    pub fn callback_count(&self) -> usize {
        self.callbacks.read().map(|c| c.len()).unwrap_or(0)
    }
}

impl Default for DispatchManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Operation, Phase};
    use crate::request_id::RequestId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn event(phase: Phase) -> ActionEvent {
        ActionEvent::new(RequestId::new(), phase, Operation::List, "children".to_string())
    }

    #[test]
    fn emit_reaches_every_subscriber() {
        let manager = DispatchManager::new();
        let seen = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let seen = Arc::clone(&seen);
            manager.add_callback(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }

        manager.emit(event(Phase::Pending));
        assert_eq!(seen.load(Ordering::SeqCst), 3);
        assert_eq!(manager.callback_count(), 3);
    }

    #[test]
    fn callback_limit_is_enforced() {
        let manager = DispatchManager::with_config(DispatchConfig::new(2, false));

        for _ in 0..5 {
            manager.add_callback(|_| {});
        }

        assert_eq!(manager.callback_count(), 2);
    }

    #[test]
    fn clear_callbacks_removes_all() {
        let manager = DispatchManager::new();
        manager.add_callback(|_| {});
        manager.clear_callbacks();
        assert_eq!(manager.callback_count(), 0);
    }
}

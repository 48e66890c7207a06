//! Observer registration and event payloads
//!
//! The engine notifies at most one completion observer and one error
//! observer. Registration is last-write-wins; registering `None` clears the
//! slot. Callbacks run synchronously on the calling thread, after the
//! engine's statistics lock has been released, so a slow or reentrant
//! observer never blocks other callers' bookkeeping.

use calc_types::CalculationResult;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Payload delivered to the completion observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationCompletedEvent {
    pub result: CalculationResult,
    /// Constant for the engine's lifetime; not part of the statistics model.
    pub session_id: u64,
}

/// Payload delivered to the error observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorOccurredEvent {
    /// The domain error's canonical display text.
    pub message: String,
    /// Fixed error-class code.
    pub code: u32,
    pub timestamp_millis: u64,
}

/// Callback invoked after a successful evaluation.
pub type CompletedCallback = Arc<dyn Fn(&CalculationCompletedEvent) + Send + Sync>;

/// Callback invoked after a failed evaluation.
pub type ErrorCallback = Arc<dyn Fn(&ErrorOccurredEvent) + Send + Sync>;

/// One slot per event kind, last write wins.
///
/// Slots store `Arc`s so the engine can clone a callback out and invoke it
/// without holding the registry lock.
#[derive(Default)]
pub struct ObserverRegistry {
    completed: Mutex<Option<CompletedCallback>>,
    error: Mutex<Option<ErrorCallback>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace (or clear, with `None`) the completion observer.
    pub fn set_completed(&self, callback: Option<CompletedCallback>) {
        *self.completed.lock() = callback;
    }

    /// Replace (or clear, with `None`) the error observer.
    pub fn set_error(&self, callback: Option<ErrorCallback>) {
        *self.error.lock() = callback;
    }

    /// Clone out the current completion observer, if any.
    pub fn completed(&self) -> Option<CompletedCallback> {
        self.completed.lock().clone()
    }

    /// Clone out the current error observer, if any.
    pub fn error(&self) -> Option<ErrorCallback> {
        self.error.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_registration_replaces_prior_callback() {
        let registry = ObserverRegistry::new();
        let first = Arc::new(AtomicU32::new(0));
        let second = Arc::new(AtomicU32::new(0));

        let f = Arc::clone(&first);
        registry.set_error(Some(Arc::new(move |_| {
            f.fetch_add(1, Ordering::SeqCst);
        })));
        let s = Arc::clone(&second);
        registry.set_error(Some(Arc::new(move |_| {
            s.fetch_add(1, Ordering::SeqCst);
        })));

        let event = ErrorOccurredEvent {
            message: "Division by zero".into(),
            code: 1,
            timestamp_millis: 0,
        };
        if let Some(cb) = registry.error() {
            cb(&event);
        }
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_none_clears_the_slot() {
        let registry = ObserverRegistry::new();
        registry.set_completed(Some(Arc::new(|_| {})));
        assert!(registry.completed().is_some());
        registry.set_completed(None);
        assert!(registry.completed().is_none());
    }
}

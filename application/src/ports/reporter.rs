//! Status reporting port
//!
//! User-facing status goes through this trait. Swapping the implementation
//! never changes a validation, build or execution decision.

use fixcore_domain::{StatusEvent, StatusKind};
use std::sync::Mutex;

/// Sink for discrete status events
///
/// Implementations live in the presentation layer (console) or in tests.
pub trait Reporter: Send + Sync {
    fn report(&self, event: &StatusEvent);

    fn info(&self, message: &str) {
        self.report(&StatusEvent::info(message));
    }

    fn success(&self, message: &str) {
        self.report(&StatusEvent::success(message));
    }

    fn warning(&self, message: &str) {
        self.report(&StatusEvent::warning(message));
    }

    fn error(&self, message: &str) {
        self.report(&StatusEvent::error(message));
    }
}

/// No-op reporter for when status output is not needed
pub struct NoReport;

impl Reporter for NoReport {
    fn report(&self, _event: &StatusEvent) {}
}

/// Reporter that keeps every event, for assertions in tests
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<StatusEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StatusEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Messages of one kind, in emission order
    pub fn messages(&self, kind: StatusKind) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.message)
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &StatusEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

//! In-process notifications for the render layer.

use std::sync::{Mutex, PoisonError};

use event_emitter_rs::EventEmitter;

use crate::error::CatalogError;
use crate::store::Action;
use crate::view::PageView;

/// Emitted after every dispatch. Payload: the action tag, e.g. `"ADD_BOOK"`.
pub const ACTION_DISPATCHED: &str = "action.dispatched";
/// Emitted after every recomputation. Payload: the JSON-encoded `PageView`.
pub const VIEW_CHANGED: &str = "view.changed";
/// Emitted when an operation is rejected or a remote call fails.
/// Payload: `"<operation>: <error>"`.
pub const OPERATION_FAILED: &str = "operation.failed";

pub(crate) struct Notifier {
    emitter: Mutex<EventEmitter>,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        Self {
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    pub(crate) fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on(event, listener);
    }

    pub(crate) fn action_dispatched(&self, action: &Action) {
        self.emit(ACTION_DISPATCHED, action.kind().to_string());
    }

    pub(crate) fn view_changed(&self, view: &PageView) {
        match serde_json::to_string(view) {
            Ok(payload) => self.emit(VIEW_CHANGED, payload),
            Err(err) => tracing::warn!(error = %err, "failed to encode view for listeners"),
        }
    }

    pub(crate) fn operation_failed(&self, operation: &str, err: &CatalogError) {
        self.emit(OPERATION_FAILED, format!("{}: {}", operation, err));
    }

    fn emit(&self, event: &str, payload: String) {
        self.emitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .emit(event, payload);
    }
}

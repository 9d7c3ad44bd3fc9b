//! Application state shared across all request handlers.

use std::sync::Arc;
use vkn_core::handler::EventHandler;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (the handler is behind
/// Arc). Configuration is immutable for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    /// The per-event pipeline.
    pub handler: Arc<EventHandler>,
}

impl AppState {
    /// Create a new AppState wrapping the event handler.
    pub fn new(handler: EventHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

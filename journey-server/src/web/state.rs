//! Application state for the web layer.

use std::sync::Arc;

use crate::poller::JourneyPoller;

/// Shared application state.
///
/// The poller is injected by the host at startup; the web layer only ever
/// reads from it.
#[derive(Clone)]
pub struct AppState {
    /// The journey poller backing the status endpoints.
    pub poller: Arc<JourneyPoller>,
}

impl AppState {
    /// Create a new app state around an already-constructed poller.
    pub fn new(poller: JourneyPoller) -> Self {
        Self {
            poller: Arc::new(poller),
        }
    }
}

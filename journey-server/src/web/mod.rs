//! Web layer for the journey monitor.
//!
//! Exposes the poller's derived status over HTTP as JSON.

mod dto;
mod routes;
mod state;

pub use dto::StatusResponse;
pub use routes::create_router;
pub use state::AppState;

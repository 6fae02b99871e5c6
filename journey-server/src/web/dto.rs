//! Response DTOs for the web layer.

use serde::Serialize;

use crate::domain::Connection;
use crate::poller::{DepartureStatus, JourneyQuery};

/// Response body for `GET /status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Display string for the upcoming departure, `"unknown"` when no
    /// connection is available.
    pub state: String,

    /// Configured origin station name.
    pub origin: String,

    /// Configured destination station name.
    pub destination: String,

    /// The first connection's full field set, when present.
    pub connection: Option<Connection>,

    /// Departure time of the second connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Departure time of the third connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_on: Option<String>,
}

impl StatusResponse {
    /// Build the response from the configured query and a derived status.
    pub fn new(query: &JourneyQuery, status: DepartureStatus) -> Self {
        Self {
            state: status.state.unwrap_or_else(|| "unknown".to_string()),
            origin: query.origin.name.clone(),
            destination: query.destination.name.clone(),
            connection: status.connection,
            next: status.next,
            next_on: status.next_on,
        }
    }
}

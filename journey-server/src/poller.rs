//! Journey polling and status derivation.
//!
//! A [`JourneyPoller`] encapsulates one origin/destination/filter
//! configuration and produces a fresh list of near-term connections on
//! demand. The host invokes [`JourneyPoller::poll`] on a fixed interval;
//! the stored list is replaced wholesale on success and preserved on
//! failure, so readers always see the most recent successful result.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::{Connection, Station, format_delay};
use crate::hafas::{HafasClient, HafasError};

/// An immutable journey query: where from, where to, and how.
#[derive(Debug, Clone)]
pub struct JourneyQuery {
    /// Resolved origin station.
    pub origin: Station,

    /// Resolved destination station.
    pub destination: Station,

    /// Only request direct connections (no changes).
    pub direct_only: bool,

    /// Lookahead added to the current time when polling. Zero by default.
    pub offset: Duration,
}

impl JourneyQuery {
    /// Create a query with no lookahead offset.
    pub fn new(origin: Station, destination: Station, direct_only: bool) -> Self {
        Self {
            origin,
            destination,
            direct_only,
            offset: Duration::zero(),
        }
    }

    /// Set a lookahead offset.
    pub fn with_offset(mut self, offset: Duration) -> Self {
        self.offset = offset;
        self
    }

    /// The transfer cap to request: zero changes when direct-only,
    /// unbounded (no parameter) otherwise.
    pub fn max_transfers(&self) -> Option<u8> {
        if self.direct_only { Some(0) } else { None }
    }
}

/// The derived "next departure" status, computed on read.
///
/// `state` is the display string for the upcoming departure; `next` and
/// `next_on` carry the departure times of the second and third connection
/// when present. All fields are absent before the first successful poll
/// and when a poll returned zero results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartureStatus {
    /// Departure time of the first connection, suffixed with its delay
    /// when one is reported and non-zero (e.g. `"14:37 + 0:05:00"`).
    pub state: Option<String>,

    /// The first connection's full field set.
    pub connection: Option<Connection>,

    /// Departure time of the second connection, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Departure time of the third connection, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_on: Option<String>,
}

/// Derive the display status from a connection list.
///
/// Pure projection of the list: the first connection supplies the state
/// string and attributes, the second and third supply `next` and
/// `next_on`. Shorter lists simply omit the trailing fields.
pub fn derive_status(connections: &[Connection]) -> DepartureStatus {
    let first = connections.first();

    let state = first.map(|c| match c.departure_delay {
        Some(delay) if delay != 0 => {
            format!("{} + {}", c.departure_time(), format_delay(delay))
        }
        _ => c.departure_time(),
    });

    DepartureStatus {
        state,
        connection: first.cloned(),
        next: connections.get(1).map(Connection::departure_time),
        next_on: connections.get(2).map(Connection::departure_time),
    }
}

/// Polls the journeys API for one configured station pair.
///
/// Cheap to clone: clones share the connection list, so the host can hand
/// one handle to the poll schedule and another to the presentation layer.
/// Construction performs no I/O.
#[derive(Clone)]
pub struct JourneyPoller {
    client: HafasClient,
    query: JourneyQuery,
    connections: Arc<RwLock<Vec<Connection>>>,
}

impl JourneyPoller {
    /// Create a poller for the given query. The connection list starts
    /// empty; the status reads as unknown until the first successful poll.
    pub fn new(client: HafasClient, query: JourneyQuery) -> Self {
        Self {
            client,
            query,
            connections: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// The query this poller was built with.
    pub fn query(&self) -> &JourneyQuery {
        &self.query
    }

    /// Fetch the current near-term connections and replace the stored list.
    ///
    /// Samples the wall clock, requests journeys departing at now plus the
    /// configured offset, and stores the projected connections in the order
    /// received. On success the previous list is replaced wholesale and the
    /// new count returned. On failure the previous list is preserved and
    /// the error is returned; scheduling a retry is the caller's decision.
    pub async fn poll(&self) -> Result<usize, HafasError> {
        let departure = Utc::now() + self.query.offset;

        let connections = self
            .client
            .journeys(
                &self.query.origin.id,
                &self.query.destination.id,
                departure,
                self.query.max_transfers(),
            )
            .await?;

        let count = connections.len();

        let mut guard = self.connections.write().await;
        *guard = connections;

        Ok(count)
    }

    /// Snapshot of the current connection list.
    pub async fn connections(&self) -> Vec<Connection> {
        let guard = self.connections.read().await;
        guard.clone()
    }

    /// Derive the display status from the current connection list.
    pub async fn status(&self) -> DepartureStatus {
        let guard = self.connections.read().await;
        derive_status(&guard)
    }
}

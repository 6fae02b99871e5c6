//! Connection records derived from journey results.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One near-term connection between the configured origin and destination.
///
/// This is a projection of a single journey result: only the journey's
/// first leg contributes, so `service`, the timestamps and the delays all
/// describe that leg. The list a poll produces is replaced wholesale on the
/// next poll; `Connection` values are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    /// Line name of the service, e.g. `"ICE 1601"`. Empty for legs with no
    /// line attached (a journey starting with a footpath).
    pub service: String,

    /// Whether the service is cancelled.
    pub cancelled: bool,

    /// Departure from the origin, real-time when available, otherwise the
    /// planned time. Keeps the UTC offset reported by the API, so
    /// formatting yields the station's wall-clock time.
    pub departure: DateTime<FixedOffset>,

    /// Arrival at the destination of the leg, real-time when available.
    pub arrival: DateTime<FixedOffset>,

    /// Departure delay in seconds. `None` when the API reports no
    /// real-time data for the departure.
    pub departure_delay: Option<i64>,

    /// Arrival delay in seconds. `None` when the API reports no real-time
    /// data for the arrival.
    pub arrival_delay: Option<i64>,

    /// Whether the connection arrives on time. True exactly when
    /// `arrival_delay` is zero; an unknown delay is not on time.
    pub on_time: bool,
}

impl Connection {
    /// Departure time formatted as `HH:MM` in the timestamp's own offset.
    pub fn departure_time(&self) -> String {
        self.departure.format("%H:%M").to_string()
    }
}

/// Format a delay in seconds as `H:MM:SS`, sign-prefixed when negative.
///
/// A 5-minute delay renders as `"0:05:00"`; an early departure of one
/// minute renders as `"-0:01:00"`.
pub fn format_delay(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let secs = seconds.unsigned_abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

//! Conversion from HAFAS DTOs to domain types.
//!
//! Each journey is projected into a single [`Connection`] from its first
//! leg. Legs beyond the first are discarded, so a multi-leg itinerary
//! reports the service, times and delays of its initial leg only.

use tracing::warn;

use crate::domain::Connection;

use super::types::JourneyDto;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Journey contained no legs
    #[error("journey has no legs")]
    NoLegs,

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert a journeys response to connections.
///
/// The output preserves the order of the input exactly; the API returns
/// journeys ordered by departure time and that ordering is not
/// re-established here. Journeys that cannot be projected are skipped with
/// a warning rather than failing the whole poll.
pub fn convert_journeys(journeys: &[JourneyDto]) -> Vec<Connection> {
    let mut connections = Vec::with_capacity(journeys.len());

    for (idx, journey) in journeys.iter().enumerate() {
        match first_leg_connection(journey) {
            Ok(connection) => connections.push(connection),
            Err(e) => {
                warn!(journey = idx, error = %e, "skipping journey");
            }
        }
    }

    connections
}

/// Project a journey into a connection from its first leg.
///
/// Real-time departure/arrival fall back to the planned times (cancelled
/// legs null out the real-time fields); a leg with neither is rejected.
pub fn first_leg_connection(journey: &JourneyDto) -> Result<Connection, ConversionError> {
    let leg = journey.legs.first().ok_or(ConversionError::NoLegs)?;

    let departure = leg
        .departure
        .or(leg.planned_departure)
        .ok_or(ConversionError::MissingField("departure"))?;

    let arrival = leg
        .arrival
        .or(leg.planned_arrival)
        .ok_or(ConversionError::MissingField("arrival"))?;

    let service = leg
        .line
        .as_ref()
        .and_then(|line| line.name.clone())
        .unwrap_or_default();

    let arrival_delay = leg.arrival_delay;

    Ok(Connection {
        service,
        cancelled: leg.cancelled.unwrap_or(false),
        departure,
        arrival,
        departure_delay: leg.departure_delay,
        arrival_delay,
        on_time: arrival_delay == Some(0),
    })
}

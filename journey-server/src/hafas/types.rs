//! HAFAS API response DTOs.
//!
//! These types map directly to the `v6.db.transport.rest` JSON responses.
//! They use `Option` liberally because the API omits real-time fields when
//! no live data exists and sends explicit `null` for cancelled times.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Response from `GET /journeys`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneysResponse {
    /// The journey results, ordered by departure time. Absent or empty
    /// when no itinerary exists for the request.
    pub journeys: Option<Vec<JourneyDto>>,
}

impl JourneysResponse {
    /// The journeys, treating an absent array as zero results.
    pub fn journeys(&self) -> &[JourneyDto] {
        self.journeys.as_deref().unwrap_or(&[])
    }
}

/// One journey (itinerary) from origin to destination.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDto {
    /// The legs of this journey, in travel order. A direct connection has
    /// exactly one leg; transfers add one leg per vehicle.
    pub legs: Vec<LegDto>,
}

/// One leg of a journey.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    /// Real-time departure. `null` for cancelled legs, absent without
    /// live data.
    pub departure: Option<DateTime<FixedOffset>>,

    /// Scheduled departure.
    pub planned_departure: Option<DateTime<FixedOffset>>,

    /// Real-time arrival.
    pub arrival: Option<DateTime<FixedOffset>>,

    /// Scheduled arrival.
    pub planned_arrival: Option<DateTime<FixedOffset>>,

    /// Departure delay in seconds. Absent when no real-time data exists.
    pub departure_delay: Option<i64>,

    /// Arrival delay in seconds.
    pub arrival_delay: Option<i64>,

    /// Whether this leg is cancelled.
    pub cancelled: Option<bool>,

    /// The line operating this leg. Absent for walking legs.
    pub line: Option<LineDto>,

    /// Whether this leg is a footpath rather than a vehicle.
    pub walking: Option<bool>,
}

/// Line information for a vehicle leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    /// Display name, e.g. `"ICE 1601"`.
    pub name: Option<String>,

    /// Product category, e.g. `"nationalExpress"`.
    pub product: Option<String>,
}

/// One location result from `GET /locations`.
///
/// The endpoint can return stops, addresses and points of interest; only
/// entries with both an id and a name are usable as stations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    /// Location type, e.g. `"stop"`.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Station id, absent for addresses.
    pub id: Option<String>,

    /// Display name.
    pub name: Option<String>,
}

//! HAFAS journeys API client.
//!
//! This module provides an HTTP client for the DB HAFAS endpoint via the
//! public `v6.db.transport.rest` facade, which wraps the proprietary HAFAS
//! wire protocol behind a plain JSON API.
//!
//! Key characteristics of the facade:
//! - Keyless; rate limited per client IP (HTTP 429)
//! - Times are RFC 3339 with the station's UTC offset
//! - Real-time fields are omitted without live data and `null` for
//!   cancelled legs; the scheduled `planned*` fields stay populated
//! - Journey results are ordered by departure time

mod client;
mod convert;
mod error;
mod types;

pub use client::{HafasClient, HafasConfig};
pub use convert::{ConversionError, convert_journeys, first_leg_connection};
pub use error::HafasError;
pub use types::{JourneyDto, JourneysResponse, LegDto, LineDto, LocationDto};

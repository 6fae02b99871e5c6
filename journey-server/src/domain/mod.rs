//! Domain types for the journey monitor.
//!
//! This module contains the core domain model types that represent
//! validated journey data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod connection;
mod station;

pub use connection::{Connection, format_delay};
pub use station::{InvalidStationId, Station, StationId};

//! Station identifier types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// An opaque station identifier assigned by the journeys API.
///
/// HAFAS station ids are numeric strings in practice (e.g. `"8011160"` for
/// Berlin Hbf), but the format is owned by the remote API and may change, so
/// the only invariant enforced here is non-emptiness. This type guarantees
/// that any `StationId` value holds at least one non-whitespace character.
///
/// # Examples
///
/// ```
/// use journey_server::domain::StationId;
///
/// let berlin = StationId::parse("8011160").unwrap();
/// assert_eq!(berlin.as_str(), "8011160");
///
/// // Empty and whitespace-only inputs are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// Surrounding whitespace is stripped; the remainder must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station resolved from free-text user input.
///
/// Resolution happens once at setup time via the locations lookup; the id
/// and display name are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    /// Identifier assigned by the journeys API.
    pub id: StationId,

    /// Human-readable station name as reported by the API.
    pub name: String,
}

impl Station {
    /// Create a station from an already-validated id and name.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

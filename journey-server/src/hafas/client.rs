//! HAFAS HTTP client.
//!
//! Provides async methods for querying the `v6.db.transport.rest` facade
//! of the DB HAFAS endpoint: journey search between two stations and
//! free-text station lookup.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{Connection, Station, StationId};

use super::convert::convert_journeys;
use super::error::HafasError;
use super::types::{JourneysResponse, LocationDto};

/// Default base URL for the transport.rest HAFAS facade.
const DEFAULT_BASE_URL: &str = "https://v6.db.transport.rest";

/// Configuration for the HAFAS client.
#[derive(Debug, Clone)]
pub struct HafasConfig {
    /// Base URL for the API (defaults to the public DB facade)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HafasConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for HafasConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HAFAS API client.
///
/// The facade is keyless; the client only carries the HTTP handle and the
/// base URL. All methods are plain request/response with no retry logic;
/// failures propagate to the caller.
#[derive(Debug, Clone)]
pub struct HafasClient {
    http: reqwest::Client,
    base_url: String,
}

impl HafasClient {
    /// Create a new HAFAS client with the given configuration.
    pub fn new(config: HafasConfig) -> Result<Self, HafasError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Search journeys from `origin` to `destination` departing at or
    /// after `departure`.
    ///
    /// `transfers` caps the number of changes; `Some(0)` requests direct
    /// connections only, `None` leaves the count unbounded (the parameter
    /// is omitted entirely). Responses are converted to [`Connection`]s at
    /// this boundary, in the order the API returned them.
    ///
    /// # Arguments
    ///
    /// * `origin` - Origin station id
    /// * `destination` - Destination station id
    /// * `departure` - Earliest departure time
    /// * `transfers` - Maximum number of changes, or `None` for unbounded
    pub async fn journeys(
        &self,
        origin: &StationId,
        destination: &StationId,
        departure: DateTime<Utc>,
        transfers: Option<u8>,
    ) -> Result<Vec<Connection>, HafasError> {
        let url = format!("{}/journeys", self.base_url);

        let mut params: Vec<(&str, String)> = vec![
            ("from", origin.as_str().to_string()),
            ("to", destination.as_str().to_string()),
            ("departure", departure.to_rfc3339()),
            ("stopovers", "false".to_string()),
        ];

        if let Some(max_changes) = transfers {
            params.push(("transfers", max_changes.to_string()));
        }

        debug!(%origin, %destination, "requesting journeys");

        let response = self.http.get(&url).query(&params).send().await?;
        let body = check_status(response).await?;

        let parsed: JourneysResponse =
            serde_json::from_str(&body).map_err(|e| HafasError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(convert_journeys(parsed.journeys()))
    }

    /// Search stations by free-text name.
    ///
    /// Returns the usable station candidates in API order; results without
    /// an id or a name (addresses, points of interest) are filtered out.
    pub async fn locations(&self, query: &str, results: u8) -> Result<Vec<Station>, HafasError> {
        let url = format!("{}/locations", self.base_url);

        let params = [
            ("query", query.to_string()),
            ("results", results.to_string()),
            ("addresses", "false".to_string()),
            ("poi", "false".to_string()),
            ("fuzzy", "true".to_string()),
        ];

        debug!(query, "searching locations");

        let response = self.http.get(&url).query(&params).send().await?;
        let body = check_status(response).await?;

        let locations: Vec<LocationDto> =
            serde_json::from_str(&body).map_err(|e| HafasError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(locations.into_iter().filter_map(to_station).collect())
    }
}

/// Map an error status to a typed error, or return the response body.
async fn check_status(response: reqwest::Response) -> Result<String, HafasError> {
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(HafasError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(HafasError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

/// Convert a location result to a station, if it has a usable id and name.
fn to_station(location: LocationDto) -> Option<Station> {
    let id = StationId::parse(&location.id?).ok()?;
    let name = location.name?;
    Some(Station::new(id, name))
}

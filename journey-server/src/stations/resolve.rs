//! Free-text station resolution.

use tracing::debug;

use crate::domain::Station;
use crate::hafas::HafasClient;

use super::error::ResolveError;

/// How many candidates to request from the locations lookup.
/// Only the first is used.
const LOOKUP_RESULTS: u8 = 5;

/// Resolve free-text user input to a station.
///
/// Queries the locations lookup and takes the first candidate; the API
/// ranks by relevance. Zero candidates is a [`ResolveError::NoMatch`].
///
/// This runs once per endpoint at setup time; the poller never sees an
/// unresolved station.
pub async fn resolve(client: &HafasClient, query: &str) -> Result<Station, ResolveError> {
    let candidates = client.locations(query, LOOKUP_RESULTS).await?;

    debug!(query, count = candidates.len(), "station candidates");

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| ResolveError::NoMatch {
            query: query.to_string(),
        })
}

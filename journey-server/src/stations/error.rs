//! Station resolution error types.

use crate::hafas::HafasError;

/// Errors that can occur when resolving a station from free text.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The lookup request itself failed
    #[error("lookup failed: {0}")]
    Hafas(#[from] HafasError),

    /// The lookup returned no usable candidates
    #[error("no station found for {query:?}")]
    NoMatch { query: String },
}

//! Station resolution from free-text input.
//!
//! Maps user-entered station names to API station ids via the locations
//! lookup, once at setup time. First match wins; no match is an error
//! surfaced to the host before the poller is constructed.

mod error;
mod resolve;

pub use error::ResolveError;
pub use resolve::resolve;

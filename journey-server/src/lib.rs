//! Journey departure monitor.
//!
//! A small server that answers: "when does my next train leave, and is
//! it late?" It polls the HAFAS journeys API for a configured
//! origin/destination pair and serves the derived status over HTTP.

pub mod domain;
pub mod hafas;
pub mod poller;
pub mod stations;
pub mod web;

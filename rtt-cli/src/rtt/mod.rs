//! RealTimeTrains (RTT) pull API client.
//!
//! This module provides an HTTP client for the RTT JSON API and the
//! departure lookup built on it.
//!
//! Key characteristics of RTT:
//! - Every request is authenticated with HTTP Basic auth
//! - Times are in "HHMM" format (UK local time)
//! - A search by station pair only returns timings at the origin, so the
//!   arrival side of each departure needs a separate service detail request
//! - Service UIDs are only unique together with their run date

mod api;
mod client;
mod departures;
mod error;
#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
pub(crate) mod stub;
mod types;

pub use api::RttApi;
pub use client::{RttClient, RttConfig};
pub use departures::{build_departure, fetch_departures};
pub use error::RttError;
pub use types::{
    SearchLocationDetail, SearchResponse, SearchService, ServiceLocation, ServiceResponse,
};

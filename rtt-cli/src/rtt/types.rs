//! RTT API response DTOs.
//!
//! These types map directly to the RealTimeTrains pull API JSON responses,
//! keeping only the fields the departure lookup reads. They use `Option`
//! liberally because RTT both omits fields and sends explicit nulls; the
//! accessor methods read an absent value as an empty string.

use serde::Deserialize;

/// Response from `GET /search/{from}/to/{to}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Services departing the origin that call at the destination.
    /// RTT sends `null` when there are none.
    pub services: Option<Vec<SearchService>>,
}

impl SearchResponse {
    /// The services in response order, empty when RTT sent none.
    pub fn services(&self) -> &[SearchService] {
        self.services.as_deref().unwrap_or_default()
    }
}

/// One service in a search response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchService {
    /// Schedule UID, e.g. "C12345". Only unique together with a run date.
    #[serde(default)]
    pub service_uid: String,

    /// False for freight and empty coaching stock moves.
    pub is_passenger: Option<bool>,

    /// Timing at the searched origin.
    pub location_detail: Option<SearchLocationDetail>,
}

impl SearchService {
    pub fn is_passenger(&self) -> bool {
        self.is_passenger.unwrap_or(false)
    }

    /// Booked public departure from the origin, "HHMM" or empty.
    pub fn booked_departure(&self) -> &str {
        self.location_detail
            .as_ref()
            .and_then(|d| d.gbtt_booked_departure.as_deref())
            .unwrap_or_default()
    }

    /// Platform at the origin, or empty.
    pub fn platform(&self) -> &str {
        self.location_detail
            .as_ref()
            .and_then(|d| d.platform.as_deref())
            .unwrap_or_default()
    }
}

/// The origin-station timing attached to a search result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLocationDetail {
    /// Booked public (GBTT) departure time, "HHMM".
    pub gbtt_booked_departure: Option<String>,

    /// Platform number/letter.
    pub platform: Option<String>,
}

/// Response from `GET /service/{uid}/{yyyy}/{mm}/{dd}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    /// Train operating company name, e.g. "Great Western Railway".
    pub atoc_name: Option<String>,

    /// Every stop on the route, in calling order.
    pub locations: Option<Vec<ServiceLocation>>,
}

impl ServiceResponse {
    pub fn operator_name(&self) -> &str {
        self.atoc_name.as_deref().unwrap_or_default()
    }

    pub fn locations(&self) -> &[ServiceLocation] {
        self.locations.as_deref().unwrap_or_default()
    }
}

/// A calling point in a service detail response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocation {
    /// CRS code of the stop. Absent for timing points without a CRS.
    pub crs: Option<String>,

    /// Booked public (GBTT) arrival time, "HHMM".
    pub gbtt_booked_arrival: Option<String>,

    /// Platform number/letter.
    pub platform: Option<String>,
}

impl ServiceLocation {
    pub fn crs(&self) -> &str {
        self.crs.as_deref().unwrap_or_default()
    }

    pub fn booked_arrival(&self) -> &str {
        self.gbtt_booked_arrival.as_deref().unwrap_or_default()
    }

    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or_default()
    }
}

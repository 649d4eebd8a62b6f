//! Departure lookup: search, then one service detail per passenger train.
//!
//! The search response gives the departure time and platform at the origin.
//! The arrival time, arrival platform and operator name only exist in each
//! service's full route, so every passenger service needs a second request.
//! Those second requests are best-effort: a service whose detail cannot be
//! fetched or decoded is skipped and the rest of the lookup carries on.

use chrono::{Local, NaiveDate};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::domain::{Departure, current_hhmm, elapsed_label, platform_or_default};

use super::api::RttApi;
use super::error::RttError;
use super::types::ServiceResponse;

/// The parts of a search result needed after its detail arrives.
#[derive(Debug, Clone)]
struct PendingService {
    service_uid: String,
    booked_departure: String,
    platform: String,
}

/// Find direct departures from `from` to `to`, in search response order.
///
/// An empty `from` means nothing has been selected yet: no request is made
/// and the result is empty. Errors from the search request are returned;
/// errors fetching an individual service only drop that service.
pub async fn fetch_departures<A: RttApi>(
    api: &A,
    from: &str,
    to: &str,
) -> Result<Vec<Departure>, RttError> {
    if from.is_empty() {
        return Ok(Vec::new());
    }

    let search = api.search(from, to).await?;

    let pending: Vec<PendingService> = search
        .services()
        .iter()
        .filter(|s| s.is_passenger())
        .map(|s| PendingService {
            service_uid: s.service_uid.clone(),
            booked_departure: s.booked_departure().to_string(),
            platform: s.platform().to_string(),
        })
        .collect();

    debug!(
        from,
        to,
        services = search.services().len(),
        passenger = pending.len(),
        "Search complete"
    );

    if pending.is_empty() {
        return Ok(Vec::new());
    }

    let run_date = Local::now().date_naive();
    let details = fetch_details(api, pending, run_date).await;

    let to = to.to_uppercase();
    let now = current_hhmm();
    let departures: Vec<Departure> = details
        .into_iter()
        .filter_map(|(service, detail)| {
            let departure = build_departure(
                &detail,
                &to,
                &service.booked_departure,
                &service.platform,
                &now,
            );
            if departure.is_none() {
                debug!(
                    service_uid = %service.service_uid,
                    to = %to,
                    "Service does not call at destination, dropping"
                );
            }
            departure
        })
        .collect();

    info!(from, to = %to, departures = departures.len(), "Departures found");

    Ok(departures)
}

/// Fetch service details, keeping input order and dropping failures.
async fn fetch_details<A: RttApi>(
    api: &A,
    pending: Vec<PendingService>,
    run_date: NaiveDate,
) -> Vec<(PendingService, ServiceResponse)> {
    let concurrency = api.max_concurrent().max(1);

    let results: Vec<(PendingService, Result<ServiceResponse, RttError>)> = stream::iter(pending)
        .map(|service| async move {
            let detail = api.service(&service.service_uid, run_date).await;
            (service, detail)
        })
        .buffered(concurrency)
        .collect()
        .await;

    results
        .into_iter()
        .filter_map(|(service, detail)| match detail {
            Ok(detail) => Some((service, detail)),
            Err(e) => {
                warn!(
                    service_uid = %service.service_uid,
                    error = %e,
                    "Failed to fetch service detail, skipping"
                );
                None
            }
        })
        .collect()
}

/// Join one search result with its service detail.
///
/// Returns `None` if the service never calls at `to` (matched upper-cased).
/// `now` is the "HHMM" anchor for the leaving label.
pub fn build_departure(
    detail: &ServiceResponse,
    to: &str,
    booked_departure: &str,
    departure_platform: &str,
    now: &str,
) -> Option<Departure> {
    let to = to.to_uppercase();
    let arrival = detail.locations().iter().find(|loc| loc.crs() == to)?;

    Some(Departure {
        booked_departure_time: booked_departure.to_string(),
        departure_platform: platform_or_default(departure_platform),
        arrival_platform: platform_or_default(arrival.platform()),
        arrival_time: arrival.booked_arrival().to_string(),
        duration: elapsed_label(booked_departure, arrival.booked_arrival()),
        leaving: elapsed_label(now, booked_departure),
        service: detail.operator_name().to_string(),
    })
}

//! The seam between the departure lookup and the HTTP client.

use std::future::Future;

use chrono::NaiveDate;

use super::error::RttError;
use super::types::{SearchResponse, ServiceResponse};

/// The two RTT requests the departure lookup needs.
///
/// This abstraction allows the lookup to be tested with mock responses.
/// The futures are `Send` so a search can run on a spawned task.
pub trait RttApi {
    /// Services from `from` that call at `to`.
    fn search(
        &self,
        from: &str,
        to: &str,
    ) -> impl Future<Output = Result<SearchResponse, RttError>> + Send;

    /// Full route of one service on a given run date.
    fn service(
        &self,
        service_uid: &str,
        date: NaiveDate,
    ) -> impl Future<Output = Result<ServiceResponse, RttError>> + Send;

    /// How many `service` requests may be in flight at once.
    fn max_concurrent(&self) -> usize {
        1
    }
}

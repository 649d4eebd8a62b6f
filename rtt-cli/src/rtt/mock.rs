//! Mock RTT client for testing without API access.
//!
//! Serves scripted search and service detail responses and records every
//! request so tests can assert how many calls were made.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use super::api::RttApi;
use super::error::RttError;
use super::types::{SearchResponse, ServiceResponse};

/// How a scripted request responds.
#[derive(Debug, Clone)]
enum Scripted {
    /// Respond with this JSON body after a delay.
    Body { json: String, delay_ms: u64 },
    /// Respond with this HTTP status.
    Status(u16),
}

impl Scripted {
    async fn respond<T: DeserializeOwned>(&self) -> Result<T, RttError> {
        match self {
            Scripted::Body { json, delay_ms } => {
                if *delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                }
                serde_json::from_str(json).map_err(|e| RttError::json(e, json))
            }
            Scripted::Status(401 | 403) => Err(RttError::Unauthorized),
            Scripted::Status(status) => Err(RttError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

/// Mock RTT client that serves scripted responses.
#[derive(Debug, Default)]
pub struct MockRttClient {
    search: Option<Scripted>,
    services: HashMap<String, Scripted>,
    max_concurrent: usize,
    search_calls: AtomicUsize,
    last_search: Mutex<Option<(String, String)>>,
    service_calls: Mutex<Vec<String>>,
}

impl MockRttClient {
    /// A client whose search returns no services.
    pub fn new() -> Self {
        Self {
            max_concurrent: 1,
            ..Self::default()
        }
    }

    pub fn with_search_json(mut self, json: &str) -> Self {
        self.search = Some(Scripted::Body {
            json: json.to_string(),
            delay_ms: 0,
        });
        self
    }

    /// Search responds with a body that is not valid search JSON.
    pub fn with_garbled_search(self, body: &str) -> Self {
        self.with_search_json(body)
    }

    pub fn with_failing_search(mut self, status: u16) -> Self {
        self.search = Some(Scripted::Status(status));
        self
    }

    pub fn with_service_json(self, service_uid: &str, json: &str) -> Self {
        self.with_delayed_service_json(service_uid, 0, json)
    }

    pub fn with_delayed_service_json(mut self, service_uid: &str, delay_ms: u64, json: &str) -> Self {
        self.services.insert(
            service_uid.to_string(),
            Scripted::Body {
                json: json.to_string(),
                delay_ms,
            },
        );
        self
    }

    pub fn with_garbled_service(self, service_uid: &str, body: &str) -> Self {
        self.with_service_json(service_uid, body)
    }

    pub fn with_failing_service(mut self, service_uid: &str, status: u16) -> Self {
        self.services
            .insert(service_uid.to_string(), Scripted::Status(status));
        self
    }

    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Number of search requests made.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Codes passed to the most recent search, as given.
    pub fn last_search(&self) -> Option<(String, String)> {
        self.last_search.lock().unwrap().clone()
    }

    /// Service UIDs requested, in request order.
    pub fn service_calls(&self) -> Vec<String> {
        self.service_calls.lock().unwrap().clone()
    }
}

impl RttApi for MockRttClient {
    async fn search(&self, from: &str, to: &str) -> Result<SearchResponse, RttError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_search.lock().unwrap() = Some((from.to_string(), to.to_string()));

        match &self.search {
            Some(scripted) => scripted.respond().await,
            None => Ok(SearchResponse::default()),
        }
    }

    async fn service(
        &self,
        service_uid: &str,
        _date: NaiveDate,
    ) -> Result<ServiceResponse, RttError> {
        self.service_calls
            .lock()
            .unwrap()
            .push(service_uid.to_string());

        match self.services.get(service_uid) {
            Some(scripted) => scripted.respond().await,
            None => Err(RttError::Api {
                status: 404,
                message: format!("no mock data for service {service_uid}"),
            }),
        }
    }

    fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }
}

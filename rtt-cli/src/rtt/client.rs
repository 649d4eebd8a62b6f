//! RTT pull API HTTP client.
//!
//! Handles authentication, URL building and status/JSON error mapping.
//! Joining search results with service details lives in `departures`.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::NaiveDate;
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::api::RttApi;
use super::error::RttError;
use super::types::{SearchResponse, ServiceResponse};

/// Default base URL for the RTT pull API.
const DEFAULT_BASE_URL: &str = "https://api.rtt.io/api/v1/json";

/// Default request timeout. A timeout counts as a transport failure.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of service detail requests in flight at once.
const DEFAULT_MAX_CONCURRENT: usize = 1;

/// Configuration for the RTT client.
#[derive(Debug, Clone)]
pub struct RttConfig {
    /// API username
    pub username: String,
    /// API password
    pub password: String,
    /// Base URL for the API (defaults to production RTT)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum concurrent service detail requests
    pub max_concurrent: usize,
}

impl RttConfig {
    /// Create a new config with the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

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

    /// Set maximum concurrent service detail requests. Zero is treated as one.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }
}

/// RTT pull API client.
///
/// The Basic auth header is computed once here and sent on every request.
#[derive(Debug, Clone)]
pub struct RttClient {
    http: reqwest::Client,
    base_url: Url,
    max_concurrent: usize,
}

impl RttClient {
    /// Create a new RTT client with the given configuration.
    pub fn new(config: RttConfig) -> Result<Self, RttError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| RttError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(RttError::InvalidUrl(config.base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            basic_auth_header(&config.username, &config.password)?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            max_concurrent: config.max_concurrent.max(1),
        })
    }

    /// `{base}/search/{FROM}/to/{TO}`, codes upper-cased and path-escaped.
    pub fn search_url(&self, from: &str, to: &str) -> Url {
        self.endpoint(&[
            "search",
            &from.to_uppercase(),
            "to",
            &to.to_uppercase(),
        ])
    }

    /// `{base}/service/{uid}/{YYYY}/{MM}/{DD}`.
    pub fn service_url(&self, service_uid: &str, date: NaiveDate) -> Url {
        let year = date.format("%Y").to_string();
        let month = date.format("%m").to_string();
        let day = date.format("%d").to_string();
        self.endpoint(&["service", service_uid, &year, &month, &day])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL can always take path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET a URL and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RttError> {
        debug!(url = %url, "RTT request");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RttError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RttError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| RttError::json(e, &body))
    }
}

impl RttApi for RttClient {
    async fn search(&self, from: &str, to: &str) -> Result<SearchResponse, RttError> {
        self.get_json(self.search_url(from, to)).await
    }

    async fn service(
        &self,
        service_uid: &str,
        date: NaiveDate,
    ) -> Result<ServiceResponse, RttError> {
        self.get_json(self.service_url(service_uid, date)).await
    }

    fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }
}

/// `Basic base64(username:password)`, marked sensitive so it stays out of logs.
fn basic_auth_header(username: &str, password: &str) -> Result<HeaderValue, RttError> {
    let token = BASE64.encode(format!("{username}:{password}"));
    let mut value = HeaderValue::from_str(&format!("Basic {token}"))
        .map_err(|_| RttError::InvalidCredentials)?;
    value.set_sensitive(true);
    Ok(value)
}

//! RTT client error types.

/// Errors from the RTT HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RttError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// RTT rejected the stored username/password
    #[error("unauthorized: check your RTT credentials (run with --reset to re-enter them)")]
    Unauthorized,

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Username/password cannot be sent as an HTTP header
    #[error("credentials contain characters that cannot be sent in a header")]
    InvalidCredentials,

    /// Base URL cannot have path segments appended
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl RttError {
    /// Build a [`RttError::Json`] keeping the start of the offending body.
    pub(crate) fn json(err: serde_json::Error, body: &str) -> Self {
        RttError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RttError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = RttError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected string (body: {})");

        let err = RttError::Json {
            message: "EOF while parsing".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: EOF while parsing");

        assert!(RttError::Unauthorized.to_string().contains("--reset"));
    }

    #[test]
    fn json_error_keeps_truncated_body() {
        let body = "x".repeat(2000);
        let parse_err = serde_json::from_str::<serde_json::Value>(&body).unwrap_err();
        match RttError::json(parse_err, &body) {
            RttError::Json { body: Some(kept), .. } => assert_eq!(kept.len(), 500),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! Error types for the Unkey client.

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

/// Result type alias using the client error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by Unkey API calls.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("HTTP transport error: {0}")]
    #[diagnostic(code(unkey_client::http))]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{title} (HTTP {status}): {detail}")]
    #[diagnostic(code(unkey_client::api))]
    Api {
        /// HTTP status code
        status: u16,
        /// Problem title, e.g. "Not Found"
        title: String,
        /// Problem detail
        detail: String,
        /// Request id reported by the API, useful when contacting support
        request_id: Option<String>,
    },

    /// A success response body did not match the expected shape.
    #[error("Failed to decode Unkey API response: {0}")]
    #[diagnostic(code(unkey_client::decode))]
    Decode(#[from] serde_json::Error),

    /// The client configuration is unusable.
    #[error("Invalid client configuration: {message}")]
    #[diagnostic(
        code(unkey_client::invalid_config),
        help("Check the root key and API URL")
    )]
    InvalidConfig {
        /// What is wrong
        message: String,
    },
}

impl Error {
    /// Whether the API reported that the object does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Builds an [`Error::Api`] from a non-success response body.
    ///
    /// Bodies that are not an Unkey error envelope are kept verbatim as the
    /// detail.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => Self::Api {
                status,
                title: envelope.error.title,
                detail: envelope.error.detail,
                request_id: envelope.meta.map(|m| m.request_id),
            },
            Err(_) => Self::Api {
                status,
                title: "Unexpected response".to_string(),
                detail: String::from_utf8_lossy(body).into_owned(),
                request_id: None,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    meta: Option<ErrorMeta>,
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorMeta {
    request_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_envelope() {
        let body = br#"{
            "meta": {"requestId": "req_123"},
            "error": {"title": "Not Found", "detail": "The key was not found", "status": 404, "type": "https://unkey.com/docs/errors/not_found"}
        }"#;
        let err = Error::from_response(404, body);
        assert!(err.is_not_found());
        match err {
            Error::Api {
                title, request_id, ..
            } => {
                assert_eq!(title, "Not Found");
                assert_eq!(request_id.as_deref(), Some("req_123"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_plain_text_body() {
        let err = Error::from_response(502, b"bad gateway");
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Unexpected response (HTTP 502): bad gateway"
        );
    }
}

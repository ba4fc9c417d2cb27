//! HTTP client trait abstraction.
//!
//! Every backend call in the client goes through [`HttpClient`]. Production
//! code uses the reqwest adapter; tests swap in the recording mock.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// Build the header map for a JSON request body.
pub fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Convenience constructor for a JSON body.
    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::with_headers(status, headers, Bytes::from(value.to_string()))
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`HttpError::Status`].
    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self
                .text()
                .unwrap_or_else(|_| "<non-utf8 body>".to_string());
            Err(HttpError::Status {
                status: self.status,
                message,
            })
        }
    }

    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failures reported by an [`HttpClient`].
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Other(String),
}

/// Trait for HTTP client operations.
///
/// The backend only speaks buffered request/response JSON, so the trait has
/// no streaming variant.
///
/// # Example
///
/// ```ignore
/// use unmutte::traits::{HttpClient, Headers, HttpError};
///
/// async fn fetch_disclaimer<C: HttpClient>(client: &C) -> Result<String, HttpError> {
///     let url = "http://localhost:8000/api/premium/disclaimer";
///     let response = client.get(url, &Headers::new()).await?;
///     response.text().map_err(|e| HttpError::Other(e.to_string()))
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// Perform a POST request with a string body.
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success_range() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(204, Bytes::new()).is_success());
        assert!(!Response::new(301, Bytes::new()).is_success());
        assert!(!Response::new(422, Bytes::new()).is_success());
        assert!(!Response::new(503, Bytes::new()).is_success());
    }

    #[test]
    fn test_error_for_status_passes_success_through() {
        let response = Response::new(201, Bytes::from("ok"));
        let response = response.error_for_status().unwrap();
        assert_eq!(response.status, 201);
    }

    #[test]
    fn test_error_for_status_keeps_body_as_message() {
        let err = Response::new(500, Bytes::from("moderation queue down"))
            .error_for_status()
            .unwrap_err();
        match err {
            HttpError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "moderation queue down");
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[test]
    fn test_json_body_round_trips_through_json() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Disclaimer {
            disclaimer: String,
        }

        let response = Response::json_body(200, &serde_json::json!({ "disclaimer": "peers" }));
        let parsed: Disclaimer = response.json().unwrap();
        assert_eq!(parsed.disclaimer, "peers");
        assert_eq!(
            response.headers.get("content-type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_json_headers_sets_content_type() {
        let headers = json_headers();
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "Connection failed: refused"
        );
        assert_eq!(
            HttpError::Status {
                status: 404,
                message: "missing".to_string()
            }
            .to_string(),
            "Server error (404): missing"
        );
        assert_eq!(
            HttpError::InvalidUrl("::".to_string()).to_string(),
            "Invalid URL: ::"
        );
    }
}

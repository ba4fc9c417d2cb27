//! Recording mock HTTP client for tests.
//!
//! Responses are registered per method and URL. Several responses registered
//! for the same route are served in order; the last one keeps answering once
//! the queue runs dry, so "feed before post / feed after post" scripts read
//! naturally.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A request seen by the mock, kept for assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// "GET" or "POST"
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// Body for POST requests
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }
}

/// A scripted answer for one request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

impl MockResponse {
    /// 200 with a JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(200, &value))
    }

    /// Arbitrary status with a JSON body.
    pub fn status(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }

    /// Transport failure.
    pub fn connection_refused() -> Self {
        MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string()))
    }
}

type RouteKey = (String, String);

/// Mock HTTP client with scripted responses and a request log.
///
/// Clones share state, so a test can hand one clone to the code under test
/// and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Mutex<HashMap<RouteKey, VecDeque<MockResponse>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method` + exact `url`.
    pub fn push_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut routes = self.routes.lock().unwrap();
        routes
            .entry((method.to_string(), url.to_string()))
            .or_default()
            .push_back(response);
    }

    /// Shorthand for a GET route.
    pub fn on_get(&self, url: &str, response: MockResponse) {
        self.push_response("GET", url, response);
    }

    /// Shorthand for a POST route.
    pub fn on_post(&self, url: &str, response: MockResponse) {
        self.push_response("POST", url, response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests whose URL ends with `suffix`.
    pub fn requests_to(&self, suffix: &str) -> Vec<RecordedRequest> {
        self.get_requests()
            .into_iter()
            .filter(|r| r.url.ends_with(suffix))
            .collect()
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn next_response(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        let mut routes = self.routes.lock().unwrap();
        let scripted = routes
            .get_mut(&(method.to_string(), url.to_string()))
            .and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            });

        match scripted {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.next_response("GET", url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.next_response("POST", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FEED: &str = "http://backend/api/community/feed";

    #[tokio::test]
    async fn test_unscripted_route_errors() {
        let client = MockHttpClient::new();
        let result = client.get(FEED, &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
        assert_eq!(client.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_queue_serves_in_order_then_repeats_last() {
        let client = MockHttpClient::new();
        client.on_get(FEED, MockResponse::json(json!({ "items": [] })));
        client.on_get(FEED, MockResponse::json(json!({ "items": [{ "content": "hi" }] })));

        let first = client.get(FEED, &Headers::new()).await.unwrap();
        let second = client.get(FEED, &Headers::new()).await.unwrap();
        let third = client.get(FEED, &Headers::new()).await.unwrap();

        assert_eq!(first.text().unwrap(), r#"{"items":[]}"#);
        assert_eq!(second.text().unwrap(), third.text().unwrap());
    }

    #[tokio::test]
    async fn test_method_is_part_of_the_route() {
        let client = MockHttpClient::new();
        client.on_post(FEED, MockResponse::json(json!({})));

        assert!(client.get(FEED, &Headers::new()).await.is_err());
        assert!(client.post(FEED, "{}", &Headers::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_records_post_body() {
        let client = MockHttpClient::new();
        client.on_post(FEED, MockResponse::connection_refused());

        let _ = client.post(FEED, r#"{"content":"hello"}"#, &Headers::new()).await;

        let recorded = client.requests_to("/api/community/feed");
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].method, "POST");
        assert_eq!(recorded[0].json_body().unwrap()["content"], "hello");
    }
}

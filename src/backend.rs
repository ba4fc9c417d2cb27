//! Backend API client.
//!
//! One method per endpoint. Every method returns an [`ApiResult`]; deciding
//! what a failure means for the screen is left to the views.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    ChatReply, ChatRequest, CommunityPost, DisclaimerResponse, FeedResponse, MoodEntry,
    MoodHistoryResponse, MoodRequest, PostRequest,
};
use crate::traits::http::json_headers;
use crate::traits::{Headers, HttpClient};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub const CHAT_PATH: &str = "/api/chat";
pub const FEED_PATH: &str = "/api/community/feed";
pub const POST_PATH: &str = "/api/community/post";
pub const MOOD_PATH: &str = "/api/wellness/mood";
pub const DISCLAIMER_PATH: &str = "/api/premium/disclaimer";

/// Client for the wellness backend.
///
/// Cheap to clone; clones share the HTTP client.
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl BackendClient {
    /// Create a client for `base_url`; trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one chat turn and get the assistant reply.
    pub async fn chat(&self, request: &ChatRequest) -> ApiResult<ChatReply> {
        self.post_json(CHAT_PATH, request).await
    }

    /// Fetch the full moderated feed.
    pub async fn feed(&self) -> ApiResult<Vec<CommunityPost>> {
        let feed: FeedResponse = self.get_json(FEED_PATH, &self.url(FEED_PATH)).await?;
        Ok(feed.items)
    }

    /// Queue a post for moderation. The response body is ignored.
    pub async fn submit_post(&self, content: &str) -> ApiResult<()> {
        let request = PostRequest {
            content: content.to_string(),
        };
        self.post_ignoring_body(POST_PATH, &request).await
    }

    /// Record a mood entry. The response body is ignored.
    pub async fn save_mood(&self, request: &MoodRequest) -> ApiResult<()> {
        self.post_ignoring_body(MOOD_PATH, request).await
    }

    /// Mood history recorded under `session_id`.
    pub async fn mood_history(&self, session_id: &str) -> ApiResult<Vec<MoodEntry>> {
        let url = format!(
            "{}/{}",
            self.url(MOOD_PATH),
            urlencoding::encode(session_id)
        );
        let history: MoodHistoryResponse = self.get_json(MOOD_PATH, &url).await?;
        Ok(history.items)
    }

    /// The premium-panel disclaimer text.
    pub async fn disclaimer(&self) -> ApiResult<String> {
        let response: DisclaimerResponse = self
            .get_json(DISCLAIMER_PATH, &self.url(DISCLAIMER_PATH))
            .await?;
        Ok(response.disclaimer)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, url: &str) -> ApiResult<T> {
        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(url, &Headers::new())
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ApiError::from_http(endpoint, e))?;
        response.json().map_err(|e| ApiError::decode(endpoint, e))
    }

    async fn post_raw<B: Serialize>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> ApiResult<crate::traits::Response> {
        let url = self.url(endpoint);
        let body = serde_json::to_string(body).map_err(|e| ApiError::encode(endpoint, e))?;
        tracing::debug!("POST {}", url);
        self.http
            .post(&url, &body, &json_headers())
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ApiError::from_http(endpoint, e))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.post_raw(endpoint, body).await?;
        response.json().map_err(|e| ApiError::decode(endpoint, e))
    }

    async fn post_ignoring_body<B: Serialize>(&self, endpoint: &'static str, body: &B) -> ApiResult<()> {
        self.post_raw(endpoint, body).await.map(|_| ())
    }
}

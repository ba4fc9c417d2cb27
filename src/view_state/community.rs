//! Community feed screen state.

use crate::error::Outcome;
use crate::models::CommunityPost;
use crate::widgets::input_box::InputBox;

use super::sequence::{RequestSequencer, RequestToken};

/// Acknowledgement shown after a post is queued for moderation.
pub const POST_ACKNOWLEDGEMENT: &str = "Sent to moderation. Thanks for sharing, yaar.";

/// Feed, compose buffer and submission state for one community mount.
#[derive(Debug, Default)]
pub struct CommunityView {
    posts: Vec<CommunityPost>,
    compose: InputBox,
    loading: bool,
    loads: RequestSequencer,
    /// Load whose completion should raise the acknowledgement
    acknowledge_after: Option<RequestToken>,
    notice: Option<&'static str>,
}

impl CommunityView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    pub fn compose(&self) -> &InputBox {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut InputBox {
        &mut self.compose
    }

    /// True while a submission (and its follow-up reload) is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_post(&self) -> bool {
        !self.loading
    }

    /// True while the newest feed load has not settled.
    pub fn is_refreshing(&self) -> bool {
        self.loads.is_pending()
    }

    /// Start a feed load. The caller fetches and reports back with the token.
    pub fn begin_load(&mut self) -> RequestToken {
        self.loads.issue()
    }

    /// Apply a settled feed load. Returns whether the posts were replaced.
    ///
    /// Failures and stale responses leave the current list untouched.
    pub fn finish_load(&mut self, token: RequestToken, outcome: Outcome<Vec<CommunityPost>>) -> bool {
        outcome.log_fallback("community feed");
        let fresh = self.loads.accept(token);
        let applied = match outcome {
            Outcome::Ok(posts) if fresh => {
                self.posts = posts;
                true
            }
            _ => false,
        };
        if !fresh {
            tracing::debug!("discarded stale feed response #{}", token.value());
        }

        if self.acknowledge_after == Some(token) {
            self.acknowledge_after = None;
            self.loading = false;
            self.notice = Some(POST_ACKNOWLEDGEMENT);
        }
        applied
    }

    /// Submit the compose buffer. Returns the content to send, or `None` if
    /// the buffer is blank or a submission is already in flight.
    pub fn post(&mut self) -> Option<String> {
        if self.loading || self.compose.is_blank() {
            return None;
        }
        self.loading = true;
        Some(self.compose.content().to_string())
    }

    /// Settle a submission. On success the compose buffer is cleared and a
    /// reload is started; its token is returned for the caller to fetch.
    pub fn finish_post(&mut self, outcome: Outcome<()>) -> Option<RequestToken> {
        outcome.log_fallback("community post");
        match outcome {
            Outcome::Ok(()) => {
                self.compose.clear();
                let token = self.begin_load();
                self.acknowledge_after = Some(token);
                Some(token)
            }
            Outcome::Fallback(_) => {
                self.loading = false;
                None
            }
        }
    }

    /// Pending blocking acknowledgement, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

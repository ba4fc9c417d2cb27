//! AppMessage enum for async communication within the application.

use crate::error::Outcome;
use crate::models::{ChatReply, CommunityPost, MoodEntry};
use crate::view_state::RequestToken;

use super::ViewInstance;

/// Results from spawned backend calls and timers.
///
/// Every variant names the view instance it belongs to.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A chat turn settled
    ChatReplied {
        instance: ViewInstance,
        outcome: Outcome<ChatReply>,
    },
    /// A community feed load settled
    FeedLoaded {
        instance: ViewInstance,
        token: RequestToken,
        outcome: Outcome<Vec<CommunityPost>>,
    },
    /// A community submission settled
    PostSubmitted {
        instance: ViewInstance,
        outcome: Outcome<()>,
    },
    /// A mood save settled
    MoodSaved {
        instance: ViewInstance,
        outcome: Outcome<()>,
    },
    /// A mood history load settled
    MoodHistoryLoaded {
        instance: ViewInstance,
        token: RequestToken,
        outcome: Outcome<Vec<MoodEntry>>,
    },
    /// The premium disclaimer fetch settled
    DisclaimerLoaded {
        instance: ViewInstance,
        outcome: Outcome<String>,
    },
    /// One second of the breathing exercise elapsed
    BreathTick { instance: ViewInstance },
}

impl AppMessage {
    pub fn instance(&self) -> ViewInstance {
        match self {
            AppMessage::ChatReplied { instance, .. }
            | AppMessage::FeedLoaded { instance, .. }
            | AppMessage::PostSubmitted { instance, .. }
            | AppMessage::MoodSaved { instance, .. }
            | AppMessage::MoodHistoryLoaded { instance, .. }
            | AppMessage::DisclaimerLoaded { instance, .. }
            | AppMessage::BreathTick { instance } => *instance,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::ChatReplied { .. } => "chat_replied",
            AppMessage::FeedLoaded { .. } => "feed_loaded",
            AppMessage::PostSubmitted { .. } => "post_submitted",
            AppMessage::MoodSaved { .. } => "mood_saved",
            AppMessage::MoodHistoryLoaded { .. } => "mood_history_loaded",
            AppMessage::DisclaimerLoaded { .. } => "disclaimer_loaded",
            AppMessage::BreathTick { .. } => "breath_tick",
        }
    }
}

//! Backend calls requested by views, run as spawned tasks.

use tracing::debug;

use crate::error::Outcome;
use crate::models::{ChatRequest, MoodRequest};
use crate::view_state::RequestToken;

use super::{App, AppMessage, ViewInstance};

/// A backend call to start on behalf of a view.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Chat(ChatRequest),
    LoadFeed(RequestToken),
    SubmitPost(String),
    SaveMood(MoodRequest),
    LoadMoodHistory { session_id: String, token: RequestToken },
    LoadDisclaimer,
}

impl App {
    /// Spawn `effect`; its result comes back as an [`AppMessage`] for
    /// `instance`. A closed channel means the app is shutting down, so send
    /// errors are ignored.
    pub(crate) fn run_effect(&self, instance: ViewInstance, effect: Effect) {
        let backend = self.backend.clone();
        let tx = self.message_tx.clone();
        debug!("{} spawning {:?}", instance, effect);

        tokio::spawn(async move {
            let message = match effect {
                Effect::Chat(request) => AppMessage::ChatReplied {
                    instance,
                    outcome: Outcome::from(backend.chat(&request).await),
                },
                Effect::LoadFeed(token) => AppMessage::FeedLoaded {
                    instance,
                    token,
                    outcome: Outcome::from(backend.feed().await),
                },
                Effect::SubmitPost(content) => AppMessage::PostSubmitted {
                    instance,
                    outcome: Outcome::from(backend.submit_post(&content).await),
                },
                Effect::SaveMood(request) => AppMessage::MoodSaved {
                    instance,
                    outcome: Outcome::from(backend.save_mood(&request).await),
                },
                Effect::LoadMoodHistory { session_id, token } => AppMessage::MoodHistoryLoaded {
                    instance,
                    token,
                    outcome: Outcome::from(backend.mood_history(&session_id).await),
                },
                Effect::LoadDisclaimer => AppMessage::DisclaimerLoaded {
                    instance,
                    outcome: Outcome::from(backend.disclaimer().await),
                },
            };
            let _ = tx.send(message);
        });
    }
}

//! Message handling for the App.

use tracing::debug;

use super::{App, AppMessage, Effect, MountedView};

impl App {
    /// Apply a settled async result to the mounted view.
    ///
    /// Messages addressed to a view instance that is no longer mounted are
    /// dropped without touching state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        let instance = msg.instance();
        if self.view.instance() != Some(instance) {
            debug!("dropping {} for unmounted {}", msg.kind(), instance);
            return;
        }
        self.mark_dirty();

        let follow_up = match (&mut self.view, msg) {
            (MountedView::Chat { view, .. }, AppMessage::ChatReplied { outcome, .. }) => {
                view.receive_reply(outcome);
                None
            }
            (
                MountedView::Community { view, .. },
                AppMessage::FeedLoaded { token, outcome, .. },
            ) => {
                view.finish_load(token, outcome);
                None
            }
            (MountedView::Community { view, .. }, AppMessage::PostSubmitted { outcome, .. }) => {
                view.finish_post(outcome).map(Effect::LoadFeed)
            }
            (MountedView::Wellness { view, .. }, AppMessage::MoodSaved { outcome, .. }) => view
                .finish_save(outcome)
                .map(|token| Effect::LoadMoodHistory {
                    session_id: view.session().to_string(),
                    token,
                }),
            (
                MountedView::Wellness { view, .. },
                AppMessage::MoodHistoryLoaded { token, outcome, .. },
            ) => {
                view.finish_load(token, outcome);
                None
            }
            (MountedView::Wellness { view, .. }, AppMessage::DisclaimerLoaded { outcome, .. }) => {
                view.set_disclaimer(outcome);
                None
            }
            (MountedView::Wellness { view, .. }, AppMessage::BreathTick { .. }) => {
                view.tick_breath();
                None
            }
            (view, msg) => {
                debug!("{} does not apply to {:?}", msg.kind(), view.screen());
                None
            }
        };

        if let Some(effect) = follow_up {
            self.run_effect(instance, effect);
        }
    }
}

//! Chat screen state.

use crate::error::Outcome;
use crate::models::{ChatReply, ChatRequest, Language, Message};
use crate::session::SessionId;
use crate::widgets::input_box::InputBox;

/// Assistant message substituted when a reply cannot be fetched.
pub const FALLBACK_REPLY: &str = "Network issue, yaar. Thoda baad try karte. ❤️";

/// Intensity at or above which the calming suggestion is shown.
pub const CALMING_THRESHOLD: f64 = 0.8;

pub const CALMING_SUGGESTION: &str =
    "Dil tez dhadak raha ho toh chhota sa game ya saans exercise karke aate hain? 4 in – 4 hold – 4 out.";

/// Transcript, input buffer and in-flight flag for one chat mount.
#[derive(Debug)]
pub struct ChatView {
    session: SessionId,
    language: Language,
    input: InputBox,
    transcript: Vec<Message>,
    loading: bool,
    /// Lines scrolled up from the bottom of the transcript
    scroll: u16,
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView {
    /// Mount a new chat with a fresh session.
    pub fn new() -> Self {
        Self::with_session(SessionId::generate())
    }

    pub fn with_session(session: SessionId) -> Self {
        Self {
            session,
            language: Language::default(),
            input: InputBox::new(),
            transcript: Vec::new(),
            loading: false,
            scroll: 0,
        }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch prompt language. No backend effect.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn input(&self) -> &InputBox {
        &self.input
    }

    /// Editing stays available while a reply is in flight.
    pub fn input_mut(&mut self) -> &mut InputBox {
        &mut self.input
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the send control is enabled.
    pub fn can_send(&self) -> bool {
        !self.loading
    }

    /// Send the input buffer.
    ///
    /// Blank input is a no-op. Otherwise the buffer is cleared, the user
    /// message is appended, the view enters `Sending`, and the request to
    /// issue is returned.
    pub fn send(&mut self) -> Option<ChatRequest> {
        if self.input.is_blank() {
            return None;
        }
        let text = self.input.take();
        self.transcript.push(Message::user(text.clone()));
        self.loading = true;
        self.scroll = 0;
        tracing::debug!(session = %self.session, "chat send ({} chars)", text.chars().count());

        Some(ChatRequest {
            session_id: self.session.to_string(),
            text,
            lang: self.language,
        })
    }

    /// Settle the in-flight send: append the reply or the fallback message.
    pub fn receive_reply(&mut self, outcome: Outcome<ChatReply>) {
        outcome.log_fallback("chat reply");
        let message = match outcome {
            Outcome::Ok(reply) => Message::assistant(reply.reply, reply.intensity),
            Outcome::Fallback(_) => Message::assistant(FALLBACK_REPLY, None),
        };
        self.transcript.push(message);
        self.loading = false;
        self.scroll = 0;
    }

    /// Intensity of the latest message that carries one, else 0.
    pub fn current_intensity(&self) -> f64 {
        self.transcript
            .iter()
            .rev()
            .find_map(|m| m.intensity)
            .unwrap_or(0.0)
    }

    pub fn show_calming_suggestion(&self) -> bool {
        self.current_intensity() >= CALMING_THRESHOLD
    }

    /// Lines scrolled up from the bottom. The renderer clamps it to the
    /// transcript height.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::Role;
    use crate::traits::HttpError;

    fn typed(text: &str) -> ChatView {
        let mut view = ChatView::new();
        view.input_mut().set_content(text);
        view
    }

    fn reply(text: &str, intensity: Option<f64>) -> Outcome<ChatReply> {
        Outcome::Ok(ChatReply {
            reply: text.to_string(),
            intensity,
        })
    }

    fn network_down() -> Outcome<ChatReply> {
        Outcome::Fallback(ApiError::from_http(
            "/api/chat",
            HttpError::ConnectionFailed("refused".to_string()),
        ))
    }

    #[test]
    fn test_blank_send_is_noop() {
        let mut view = typed("   ");
        assert!(view.send().is_none());
        assert!(view.transcript().is_empty());
        assert!(!view.is_loading());
        assert_eq!(view.input().content(), "   ");
    }

    #[test]
    fn test_send_is_optimistic() {
        let mut view = typed("I'm furious");
        let request = view.send().unwrap();

        assert!(view.input().is_empty());
        assert_eq!(view.transcript(), &[Message::user("I'm furious")]);
        assert!(view.is_loading());
        assert!(!view.can_send());
        assert_eq!(request.text, "I'm furious");
        assert_eq!(request.session_id, view.session().as_str());
        assert_eq!(request.lang, Language::English);
    }

    #[test]
    fn test_request_carries_selected_language() {
        let mut view = typed("gussa aa raha hai");
        view.set_language(Language::Hindi);
        view.set_language(Language::Hindi);
        assert_eq!(view.send().unwrap().lang, Language::Hindi);
    }

    #[test]
    fn test_reply_appends_assistant_and_clears_loading() {
        let mut view = typed("hello");
        view.send();
        view.receive_reply(reply("Hi, I'm here.", Some(0.2)));

        assert_eq!(view.transcript().len(), 2);
        let last = &view.transcript()[1];
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.text, "Hi, I'm here.");
        assert!(!view.is_loading());
    }

    #[test]
    fn test_failure_appends_fallback() {
        let mut view = typed("hello");
        view.send();
        view.receive_reply(network_down());

        let last = view.transcript().last().unwrap();
        assert_eq!(last.text, FALLBACK_REPLY);
        assert_eq!(last.intensity, None);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_intensity_defaults_to_zero() {
        let view = ChatView::new();
        assert_eq!(view.current_intensity(), 0.0);
        assert!(!view.show_calming_suggestion());
    }

    #[test]
    fn test_intensity_tracks_latest_carrier() {
        let mut view = typed("one");
        view.send();
        view.receive_reply(reply("first", Some(0.9)));
        assert!(view.show_calming_suggestion());

        // A fallback carries no intensity, so the previous value still holds.
        view.input_mut().set_content("two");
        view.send();
        view.receive_reply(network_down());
        assert_eq!(view.current_intensity(), 0.9);

        view.input_mut().set_content("three");
        view.send();
        view.receive_reply(reply("calmer", Some(0.3)));
        assert_eq!(view.current_intensity(), 0.3);
        assert!(!view.show_calming_suggestion());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut view = typed("x");
        view.send();
        view.receive_reply(reply("y", Some(CALMING_THRESHOLD)));
        assert!(view.show_calming_suggestion());
    }

    #[test]
    fn test_sessions_differ_per_mount() {
        assert_ne!(ChatView::new().session(), ChatView::new().session());
    }

    #[test]
    fn test_scroll_resets_on_new_message() {
        let mut view = typed("x");
        view.scroll_up(5);
        assert_eq!(view.scroll(), 5);
        view.scroll_down(2);
        assert_eq!(view.scroll(), 3);
        view.send();
        assert_eq!(view.scroll(), 0);
    }
}

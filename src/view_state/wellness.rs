//! Wellness screen state: breathing, mood tracker, premium disclaimer.

use crate::error::Outcome;
use crate::models::{InvalidMoodRating, MoodEntry, MoodRating, MoodRequest};
use crate::session::SessionId;
use crate::widgets::input_box::InputBox;

use super::breath::BreathCycle;
use super::sequence::{RequestSequencer, RequestToken};

/// Lead text of the premium panel; the backend disclaimer follows it.
pub const PREMIUM_LEAD: &str = "Trained emotional support listeners available for subscribers. They are caring peers, not medical professionals unless explicitly certified.";

#[derive(Debug)]
pub struct WellnessView {
    session: SessionId,
    breath: BreathCycle,
    mood: MoodRating,
    note: InputBox,
    entries: Vec<MoodEntry>,
    history_loads: RequestSequencer,
    saving: bool,
    disclaimer: String,
}

impl Default for WellnessView {
    fn default() -> Self {
        Self::new()
    }
}

impl WellnessView {
    /// Mount with a fresh session, independent of any chat session.
    pub fn new() -> Self {
        Self::with_session(SessionId::generate())
    }

    pub fn with_session(session: SessionId) -> Self {
        Self {
            session,
            breath: BreathCycle::new(),
            mood: MoodRating::default(),
            note: InputBox::new(),
            entries: Vec::new(),
            history_loads: RequestSequencer::new(),
            saving: false,
            disclaimer: String::new(),
        }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn breath(&self) -> &BreathCycle {
        &self.breath
    }

    /// One second of the breathing exercise.
    pub fn tick_breath(&mut self) {
        self.breath.tick();
    }

    pub fn mood(&self) -> MoodRating {
        self.mood
    }

    pub fn set_mood(&mut self, value: u8) -> Result<(), InvalidMoodRating> {
        self.mood = MoodRating::new(value)?;
        Ok(())
    }

    pub fn note(&self) -> &InputBox {
        &self.note
    }

    pub fn note_mut(&mut self) -> &mut InputBox {
        &mut self.note
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// The newest entry: latest `created_at`, falling back to the last one
    /// in server order when timestamps are missing.
    pub fn most_recent(&self) -> Option<&MoodEntry> {
        let stamped = self
            .entries
            .iter()
            .filter_map(|e| e.created_at_utc().map(|t| (t, e)))
            .max_by_key(|(t, _)| *t)
            .map(|(_, e)| e);
        stamped.or_else(|| self.entries.last())
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Build the save request. `None` while a save is in flight.
    pub fn save_mood(&mut self) -> Option<MoodRequest> {
        if self.saving {
            return None;
        }
        self.saving = true;
        Some(MoodRequest {
            session_id: self.session.to_string(),
            mood: self.mood,
            note: self.note.content().to_string(),
        })
    }

    /// Settle a save. On success the note is cleared and a history reload is
    /// started; on failure the note is kept for another try.
    pub fn finish_save(&mut self, outcome: Outcome<()>) -> Option<RequestToken> {
        outcome.log_fallback("mood save");
        self.saving = false;
        match outcome {
            Outcome::Ok(()) => {
                self.note.clear();
                Some(self.begin_load())
            }
            Outcome::Fallback(_) => None,
        }
    }

    /// True while the newest history load has not settled.
    pub fn is_loading_history(&self) -> bool {
        self.history_loads.is_pending()
    }

    pub fn begin_load(&mut self) -> RequestToken {
        self.history_loads.issue()
    }

    /// Replace the history with a fresh server result. Returns whether applied.
    pub fn finish_load(&mut self, token: RequestToken, outcome: Outcome<Vec<MoodEntry>>) -> bool {
        outcome.log_fallback("mood history");
        if !self.history_loads.accept(token) {
            tracing::debug!("discarded stale mood history #{}", token.value());
            return false;
        }
        match outcome {
            Outcome::Ok(entries) => {
                self.entries = entries;
                true
            }
            Outcome::Fallback(_) => false,
        }
    }

    pub fn disclaimer(&self) -> &str {
        &self.disclaimer
    }

    /// Apply the one-shot disclaimer fetch. Failure leaves it blank.
    pub fn set_disclaimer(&mut self, outcome: Outcome<String>) {
        outcome.log_fallback("premium disclaimer");
        if let Outcome::Ok(text) = outcome {
            self.disclaimer = text;
        }
    }
}

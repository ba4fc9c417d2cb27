//! Per-screen view state.
//!
//! Each view is a plain state machine: user operations mutate local state
//! synchronously and hand back the request the app should run; the app feeds
//! the settled [`Outcome`](crate::error::Outcome) back in. Nothing here touches
//! the network or the terminal, which keeps every transition unit-testable.
//!
//! ```text
//!  key press ──► view.op() ──► Some(request) ──► app spawns task
//!                                                   │
//!  redraw ◄── view.finish_*(token, outcome) ◄── AppMessage
//! ```

mod breath;
mod chat;
mod community;
mod sequence;
mod wellness;

pub use breath::{BreathCycle, BreathPhase, BREATH_COUNT_START};
pub use chat::{ChatView, CALMING_SUGGESTION, CALMING_THRESHOLD, FALLBACK_REPLY};
pub use community::{CommunityView, POST_ACKNOWLEDGEMENT};
pub use sequence::{RequestSequencer, RequestToken};
pub use wellness::{WellnessView, PREMIUM_LEAD};

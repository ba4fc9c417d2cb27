//! Color theme constants.
//!
//! Dark palette: warm orange brand mark, emerald for the user's own voice and
//! primary actions, amber for the calming nudge.

use ratatui::style::Color;

/// Inactive borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused borders and highlights
pub const COLOR_ACCENT: Color = Color::White;

/// Brand dot next to the product name
pub const COLOR_BRAND: Color = Color::Rgb(251, 146, 60);

/// User messages, selected mood, primary actions
pub const COLOR_ACTION: Color = Color::Rgb(16, 185, 129);

/// Assistant messages and body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for hints and metadata
pub const COLOR_DIM: Color = Color::DarkGray;

/// Calming suggestion banner
pub const COLOR_CALM: Color = Color::Rgb(253, 230, 138);

/// Spinner frames shown while a call is in flight
pub const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

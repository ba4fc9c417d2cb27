//! UI rendering.
//!
//! Every screen shares one layout: a one-line header with the brand and the
//! screen tabs, the screen body, and a one-line key hint footer.

mod chat;
mod community;
mod helpers;
mod landing;
mod theme;
mod wellness;

pub use community::{COMPOSE_PLACEHOLDER, EMPTY_FEED};
pub use helpers::wrap_text;
pub use landing::{ANONYMITY_NOTE, EMERGENCY_NOTE, TAGLINE};
pub use theme::{COLOR_ACCENT, COLOR_ACTION, COLOR_BORDER, COLOR_BRAND, COLOR_DIM};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, MountedView, Screen};

const TABS: [(Screen, &str); 4] = [
    (Screen::Home, "Home"),
    (Screen::Chat, "1 Chat"),
    (Screen::Community, "2 Community"),
    (Screen::Wellness, "3 Wellness Hub"),
];

fn render_header(frame: &mut Frame, area: Rect, current: Screen) {
    let mut spans = vec![
        Span::styled("● ", Style::default().fg(COLOR_BRAND)),
        Span::styled("Unmutte", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
    ];
    for (screen, label) in TABS {
        let style = if screen == current {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "1/c chat · 2/f community · 3/w wellness · q quit",
        Screen::Chat => "Enter send · Tab language · PgUp/PgDn scroll · Esc home",
        Screen::Community => "Enter post · Ctrl+R refresh · Esc home",
        Screen::Wellness => "Tab focus · 1-5 mood · Enter save · Ctrl+R reload · Esc home",
    }
}

/// Draw the whole UI for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app.screen());

    let tick = app.tick_count;
    match app.view() {
        MountedView::Home => landing::render_landing(frame, body),
        MountedView::Chat { view, .. } => chat::render_chat(frame, body, view, tick),
        MountedView::Community { view, .. } => {
            community::render_community(frame, body, view, tick)
        }
        MountedView::Wellness { view, focus, .. } => {
            wellness::render_wellness(frame, body, view, *focus, tick)
        }
    }

    frame.render_widget(
        Paragraph::new(key_hints(app.screen())).style(Style::default().fg(COLOR_DIM)),
        footer,
    );
}

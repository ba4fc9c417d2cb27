//! Community feed screen.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::view_state::CommunityView;
use crate::widgets::input_box::InputBoxWidget;

use super::helpers::{centered_rect, panel, wrap_text};
use super::theme::{COLOR_ACCENT, COLOR_ACTION, COLOR_DIM, COLOR_TEXT, SPINNER};

pub const COMPOSE_PLACEHOLDER: &str = "Share something. No names, no judgement.";
pub const EMPTY_FEED: &str = "No posts yet.";

fn feed_lines(view: &CommunityView, width: usize) -> Vec<Line<'static>> {
    if view.posts().is_empty() {
        return vec![Line::from(Span::styled(EMPTY_FEED, Style::default().fg(COLOR_DIM)))];
    }

    let mut lines = Vec::new();
    for post in view.posts() {
        lines.push(Line::from(Span::styled(
            post.display_alias().to_string(),
            Style::default().fg(COLOR_DIM),
        )));
        for row in wrap_text(&post.content, width) {
            lines.push(Line::from(Span::styled(row, Style::default().fg(COLOR_TEXT))));
        }
        lines.push(Line::from(Span::styled(
            format!("Reports: {}", post.report_count()),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::DIM),
        )));
        lines.push(Line::from(""));
    }
    lines
}

pub fn render_community(frame: &mut Frame, area: Rect, view: &CommunityView, tick: u64) {
    let [top, compose, feed] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new("Anonymous by default • e.g., Ally-901")
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Right),
        top,
    );

    let title = if view.is_loading() {
        format!(" {} Posting… ", SPINNER[(tick as usize / 6) % SPINNER.len()])
    } else {
        " Post (Enter) ".to_string()
    };
    frame.render_widget(
        InputBoxWidget::new(view.compose(), &title, COMPOSE_PLACEHOLDER, view.notice().is_none()),
        compose,
    );

    let block = if view.is_refreshing() {
        panel("Recent (moderated) ↻", false)
    } else {
        panel("Recent (moderated)", false)
    };
    let inner = block.inner(feed);
    frame.render_widget(block, feed);
    frame.render_widget(Paragraph::new(feed_lines(view, inner.width as usize)), inner);

    if let Some(notice) = view.notice() {
        render_notice(frame, area, notice);
    }
}

/// Blocking acknowledgement; any key dismisses it.
fn render_notice(frame: &mut Frame, area: Rect, text: &str) {
    let width = (text.chars().count() as u16 + 6).min(area.width);
    let rect = centered_rect(width, 5, area);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(text.to_string(), Style::default().fg(COLOR_ACTION))),
            Line::from(""),
            Line::from(Span::styled("press any key", Style::default().fg(COLOR_DIM))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel("Unmutte", true).border_style(Style::default().fg(COLOR_ACCENT))),
        rect,
    );
}

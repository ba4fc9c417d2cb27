//! Vent (chat) screen.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::models::Language;
use crate::view_state::{ChatView, CALMING_SUGGESTION};
use crate::widgets::input_box::InputBoxWidget;

use super::helpers::{panel, wrap_text};
use super::theme::{COLOR_ACCENT, COLOR_ACTION, COLOR_CALM, COLOR_DIM, COLOR_TEXT, SPINNER};

/// Bubbles take at most this share of the transcript width.
const BUBBLE_PERCENT: usize = 80;

fn language_switch(current: Language) -> Line<'static> {
    let mut spans = vec![Span::styled("Tab ", Style::default().fg(COLOR_DIM))];
    for lang in [Language::English, Language::Hindi] {
        let style = if lang == current {
            Style::default().fg(Color::Black).bg(COLOR_ACCENT)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", lang.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans).alignment(Alignment::Right)
}

/// Transcript as display lines, oldest first.
fn transcript_lines(view: &ChatView, width: usize, tick: u64) -> Vec<Line<'static>> {
    let bubble_width = (width * BUBBLE_PERCENT / 100).max(1);
    let mut lines = Vec::new();

    for message in view.transcript() {
        let (style, alignment) = if message.is_user() {
            (Style::default().fg(COLOR_ACTION), Alignment::Right)
        } else {
            (Style::default().fg(COLOR_TEXT), Alignment::Left)
        };
        for row in wrap_text(&message.text, bubble_width) {
            lines.push(Line::from(Span::styled(row, style)).alignment(alignment));
        }
        lines.push(Line::from(""));
    }

    if view.is_loading() {
        let frame = SPINNER[(tick as usize / 6) % SPINNER.len()];
        lines.push(Line::from(Span::styled(
            format!("{} listening…", frame),
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines
}

pub fn render_chat(frame: &mut Frame, area: Rect, view: &ChatView, tick: u64) {
    let banner_height = if view.show_calming_suggestion() { 3 } else { 0 };
    let [top, transcript_area, banner, input] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(banner_height),
        Constraint::Length(3),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(language_switch(view.language())), top);

    let block = panel("Vent", false);
    let inner = block.inner(transcript_area);
    frame.render_widget(block, transcript_area);

    if view.transcript().is_empty() && !view.is_loading() {
        frame.render_widget(
            Paragraph::new(view.language().prompt())
                .style(Style::default().fg(COLOR_DIM))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            inner,
        );
    } else {
        let lines = transcript_lines(view, inner.width as usize, tick);
        let height = inner.height as usize;
        let max_scroll = lines.len().saturating_sub(height);
        let from_bottom = (view.scroll() as usize).min(max_scroll);
        let top_row = max_scroll - from_bottom;
        frame.render_widget(
            Paragraph::new(lines).scroll((top_row.min(u16::MAX as usize) as u16, 0)),
            inner,
        );
    }

    if banner_height > 0 {
        frame.render_widget(
            Paragraph::new(CALMING_SUGGESTION)
                .style(Style::default().fg(COLOR_CALM).add_modifier(Modifier::ITALIC))
                .wrap(Wrap { trim: true })
                .block(panel("Take a breath", false).border_style(Style::default().fg(COLOR_CALM))),
            banner,
        );
    }

    let title = if view.can_send() { " Say it " } else { " Sending… " };
    frame.render_widget(
        InputBoxWidget::new(view.input(), title, view.language().prompt(), true),
        input,
    );
}

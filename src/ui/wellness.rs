//! Wellness hub: breathing, mood tracker, premium panel.

use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::WellnessFocus;
use crate::models::MoodRating;
use crate::view_state::{WellnessView, PREMIUM_LEAD};
use crate::widgets::input_box::InputBoxWidget;

use super::helpers::panel;
use super::theme::{COLOR_ACTION, COLOR_DIM, COLOR_TEXT, SPINNER};

pub const NOTE_PLACEHOLDER: &str = "Add a small note (optional)";
const BREATH_CAPTION: &str = "In — Hold — Out. Bas saath mein saans lete rahenge.";

fn render_breath(frame: &mut Frame, area: Rect, view: &WellnessView) {
    let breath = view.breath();
    let lines = vec![
        Line::from(Span::styled("4-4-4 Box Breathing", Style::default().fg(COLOR_DIM))),
        Line::from(""),
        Line::from(Span::styled(
            breath.phase().label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            breath.seconds_remaining().to_string(),
            Style::default().fg(COLOR_ACTION).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(BREATH_CAPTION, Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(panel("Breathe", false)),
        area,
    );
}

fn mood_selector(view: &WellnessView, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::styled("Mood ", Style::default().fg(COLOR_TEXT))];
    for rating in MoodRating::all() {
        let style = if rating == view.mood() {
            Style::default().fg(Color::Black).bg(COLOR_ACTION)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", rating), style));
        spans.push(Span::raw(" "));
    }
    if focused {
        spans.push(Span::styled("←/→ or 1-5", Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

fn history_lines(view: &WellnessView) -> Vec<Line<'static>> {
    let now = Utc::now();
    view.entries()
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(entry.summary(), Style::default().fg(COLOR_TEXT)),
                Span::raw("  "),
                Span::styled(entry.display_time(now), Style::default().fg(COLOR_DIM)),
            ])
        })
        .collect()
}

fn render_tracker(frame: &mut Frame, area: Rect, view: &WellnessView, focus: WellnessFocus, tick: u64) {
    let block = panel("Mood Tracker", focus == WellnessFocus::Mood);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [selector, note, status, history] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(mood_selector(view, focus == WellnessFocus::Mood)),
        selector,
    );
    frame.render_widget(
        InputBoxWidget::new(view.note(), " Note ", NOTE_PLACEHOLDER, focus == WellnessFocus::Note),
        note,
    );

    let status_line = if view.is_saving() {
        Line::from(Span::styled(
            format!("{} Saving…", SPINNER[(tick as usize / 6) % SPINNER.len()]),
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        let recent = if view.is_loading_history() { "save · Recent ↻" } else { "save · Recent" };
        Line::from(vec![
            Span::styled("Enter ", Style::default().fg(COLOR_ACTION)),
            Span::styled(recent, Style::default().fg(COLOR_DIM)),
        ])
    };
    frame.render_widget(Paragraph::new(status_line), status);
    frame.render_widget(Paragraph::new(history_lines(view)), history);
}

fn render_premium(frame: &mut Frame, area: Rect, view: &WellnessView) {
    let lines = vec![
        Line::from(Span::styled(PREMIUM_LEAD, Style::default().fg(COLOR_TEXT))),
        Line::from(Span::styled(
            view.disclaimer().to_string(),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Human Connection (Premium)", false)),
        area,
    );
}

pub fn render_wellness(
    frame: &mut Frame,
    area: Rect,
    view: &WellnessView,
    focus: WellnessFocus,
    tick: u64,
) {
    let [top, main, premium] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(10),
        Constraint::Length(5),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new("Simple breath + track your mood")
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Right),
        top,
    );

    let [breath, tracker] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(main);
    render_breath(frame, breath, view);
    render_tracker(frame, tracker, view, focus, tick);
    render_premium(frame, premium, view);
}

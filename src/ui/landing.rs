//! Home screen.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ACTION, COLOR_BORDER, COLOR_DIM, COLOR_TEXT};

pub const TAGLINE: &str =
    "A safe space to vent, be angry, and be accepted — jaise apna langotiya yaar.";
pub const SUBTITLE: &str =
    "Confidential, multilingual emotional wellness. No judgement. Only warmth, clarity and care.";
pub const ANONYMITY_NOTE: &str =
    "100% anonymous by default. End-to-end encrypted storage for chat.";
pub const EMERGENCY_NOTE: &str = "Made with care. If you’re in danger or planning to harm yourself or others, please contact local emergency services immediately.";

/// (key, title, description) for each feature card.
const FEATURES: [(&str, &str, &str); 3] = [
    (
        "1",
        "Chat (AI)",
        "Warm, non-clinical, bilingual chat that absorbs your anger and holds space gently.",
    ),
    (
        "2",
        "Community (Anonymous)",
        "Post and reply as Ally-### with generic avatars. Quick moderation and reporting.",
    ),
    (
        "3",
        "Wellness Hub",
        "Mind relaxation games, simple breath work, and mood tracking over time.",
    ),
];

pub fn render_landing(frame: &mut Frame, area: Rect) {
    let [hero, cards, footer] = Layout::vertical([
        Constraint::Min(7),
        Constraint::Length(7),
        Constraint::Length(3),
    ])
    .areas(area);

    let hero_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            TAGLINE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(COLOR_TEXT))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[1] Start talking", Style::default().fg(COLOR_ACTION)),
            Span::raw("   "),
            Span::styled("[2] Peek community", Style::default().fg(COLOR_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(ANONYMITY_NOTE, Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(
        Paragraph::new(hero_text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        hero,
    );

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards);
    for ((key, title, description), column) in FEATURES.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(Line::from(vec![
                Span::styled(format!(" [{}] ", key), Style::default().fg(COLOR_ACTION)),
                Span::styled(format!("{} ", title), Style::default().add_modifier(Modifier::BOLD)),
            ]));
        frame.render_widget(
            Paragraph::new(*description)
                .style(Style::default().fg(COLOR_TEXT))
                .wrap(Wrap { trim: true })
                .block(block),
            *column,
        );
    }

    frame.render_widget(
        Paragraph::new(EMERGENCY_NOTE)
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        footer,
    );
}

//! Splash and player-picker screens

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_splash(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ABACUS",
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Count with beads on four rods: ones, tens, hundreds and thousands.",
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to start",
            Style::default().fg(DEFAULT_THEME.secondary),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

pub fn render_player_picker(frame: &mut Frame, area: Rect, players: &[String]) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Who is playing today?",
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, name) in players.iter().take(9).enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", i + 1),
                Style::default().bg(DEFAULT_THEME.primary).fg(ratatui::style::Color::Black),
            ),
            Span::styled(format!("  {}", name), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
        lines.push(Line::from(""));
    }
    if players.is_empty() {
        lines.push(Line::from(Span::styled(
            "No players configured (set `players` in abacus.toml)",
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Players ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_focused)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

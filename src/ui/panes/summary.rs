//! Header bar: player badge, total, per-rod breakdown and preferences

use crate::presentation::{column_breakdown, Verbosity};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// First letter of the player's name, `?` when nobody is playing
pub fn player_badge(user: Option<&str>) -> String {
    user.and_then(|name| name.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[allow(clippy::too_many_arguments)]
pub fn render_summary_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    user: Option<&str>,
    voice: bool,
    sound: bool,
    verbosity: Verbosity,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Line::from(vec![
        Span::styled(
            format!(" {} ", player_badge(user)),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", user.unwrap_or("Nobody")),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled("│ Total ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            snapshot.total.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", column_breakdown(&snapshot.counts)),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);
    frame.render_widget(Paragraph::new(left), halves[0]);

    let flag = |label: &str, on: bool| {
        Span::styled(
            format!(" {} {} ", label, if on { "On" } else { "Off" }),
            Style::default().fg(if on {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.comment
            }),
        )
    };
    let right = Line::from(vec![
        flag("Voice", voice),
        flag("Sound", sound),
        Span::styled(
            format!(" Chat {} ", verbosity),
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), halves[1]);
}

//! Status bar rendering with keybindings and state indicators

use crate::ui::app::Screen;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    screen: Screen,
    lesson_active: bool,
    is_carrying: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let mode = match screen {
        Screen::Splash => " WELCOME ",
        Screen::PlayerPicker => " PLAYERS ",
        Screen::Play if lesson_active => " LESSON ",
        Screen::Play => " FREE PLAY ",
    };
    let left_spans = vec![
        Span::styled(
            mode,
            Style::default()
                .bg(if lesson_active {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];
    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let binds = key_bindings(screen, lesson_active);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in binds.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    if is_carrying {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ↻ CARRY ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}

/// Key hints for the right-hand side of the bar
pub fn key_bindings(
    screen: Screen,
    lesson_active: bool,
) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Splash => &[("any key", "start"), ("q", "quit")],
        Screen::PlayerPicker => &[("1-9", "choose"), ("h", "hear"), ("q", "quit")],
        Screen::Play if lesson_active => &[
            ("↑/↓ ←/→", "rod/bead"),
            ("0-9", "set rod"),
            ("c", "check"),
            ("x", "quit lesson"),
            ("r", "reset"),
            ("q", "quit"),
        ],
        Screen::Play => &[
            ("↑/↓ ←/→", "rod/bead"),
            ("0-9", "set rod"),
            ("r", "reset"),
            ("l", "lesson"),
            ("v/s/m", "voice/sound/chat"),
            ("u", "player"),
            ("q", "quit"),
        ],
    }
}

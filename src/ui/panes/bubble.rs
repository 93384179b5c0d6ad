//! Speech bubble: lesson instructions while a lesson runs, otherwise the
//! feedback for the last move

use crate::lesson::LessonState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_bubble_pane(
    frame: &mut Frame,
    area: Rect,
    lesson: LessonState,
    feedback: Option<&str>,
    narration: Option<&str>,
) {
    let (title, border) = match lesson.step_index() {
        Some(step) => (
            format!(" Lesson 2 + 2 · step {} ", step + 1),
            DEFAULT_THEME.border_focused,
        ),
        None => (" Teacher ".to_string(), DEFAULT_THEME.border_normal),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let mut lines = Vec::new();
    if let Some(instruction) = lesson.instruction() {
        lines.push(Line::from(Span::styled(
            instruction,
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )));
    } else if let Some(text) = feedback {
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", text),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Click or drag the beads to start counting.",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }
    if let Some(said) = narration {
        lines.push(Line::from(Span::styled(
            format!("🗣 {}", said),
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

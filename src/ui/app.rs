//! Main TUI application state and logic

use crate::engine::Column;
use crate::presentation::layout::{column_at, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::session::Session;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long to wait for input before checking the carry queue again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    PlayerPicker,
    Play,
}

/// Map a terminal cell inside `area` to canvas coordinates (cell centres).
pub fn cell_to_canvas(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    if area.width == 0
        || area.height == 0
        || column < area.x
        || row < area.y
        || column >= area.x + area.width
        || row >= area.y + area.height
    {
        return None;
    }
    let x = (column - area.x) as f64 + 0.5;
    let y = (row - area.y) as f64 + 0.5;
    Some((
        x * CANVAS_WIDTH / area.width as f64,
        y * CANVAS_HEIGHT / area.height as f64,
    ))
}

/// Rod above `rod`, wrapping from Ones to Thousands
fn rod_above(rod: Column) -> Column {
    Column::from_index((rod.index() + Column::ALL.len() - 1) % Column::ALL.len()).unwrap_or(rod)
}

fn rod_below(rod: Column) -> Column {
    rod.next().unwrap_or(Column::Ones)
}

/// The main application state
pub struct App {
    pub session: Session,

    /// Names offered on the player picker
    pub players: Vec<String>,

    pub screen: Screen,

    /// Rod driven by the keyboard
    pub selected: Column,

    /// Canvas area from the last frame, for mouse mapping
    pub abacus_area: Rect,

    /// Rod a left-button drag started on
    pub drag_rod: Option<Column>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(session: Session, players: Vec<String>) -> Self {
        let screen = if session.user().is_some() {
            Screen::Play
        } else {
            Screen::Splash
        };
        App {
            session,
            players,
            screen,
            selected: Column::Ones,
            abacus_area: Rect::default(),
            drag_rod: None,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.session.tick(Instant::now());
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key, Instant::now());
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse, Instant::now()),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);
        let body = main_chunks[0];
        let status_area = main_chunks[1];

        match self.screen {
            Screen::Splash => super::panes::render_splash(frame, body),
            Screen::PlayerPicker => super::panes::render_player_picker(frame, body, &self.players),
            Screen::Play => self.render_play(frame, body),
        }

        let snapshot = self.session.snapshot();
        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.screen,
            snapshot.lesson.is_active(),
            snapshot.is_carrying,
        );
    }

    fn render_play(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(5),
            ])
            .split(area);

        let snapshot = self.session.snapshot();
        super::panes::render_summary_pane(
            frame,
            rows[0],
            &snapshot,
            self.session.user(),
            self.session.voice(),
            self.session.sound(),
            self.session.verbosity(),
        );
        self.abacus_area =
            super::panes::render_abacus_pane(frame, rows[1], &snapshot, self.selected);
        super::panes::render_bubble_pane(
            frame,
            rows[2],
            snapshot.lesson,
            self.session.feedback(),
            self.session.narration(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.should_quit = true;
            return;
        }
        match self.screen {
            Screen::Splash => {
                self.session.greet();
                self.screen = Screen::PlayerPicker;
                self.status_message = "Choose a player".to_string();
            }
            Screen::PlayerPicker => self.handle_picker_key(key),
            Screen::Play => self.handle_play_key(key, now),
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(name) = self.players.get(index).cloned() {
                    self.session.choose_user(&name);
                    self.screen = Screen::Play;
                    self.status_message = format!("Hello, {}!", name);
                }
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.session.repeat_player_prompt();
            }
            _ => {}
        }
    }

    fn handle_play_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Up => self.selected = rod_above(self.selected),
            KeyCode::Down => self.selected = rod_below(self.selected),
            // Counted beads sit on the left
            KeyCode::Left => {
                let _ = self.session.nudge(self.selected, 1, now);
            }
            KeyCode::Right => {
                let _ = self.session.nudge(self.selected, -1, now);
            }
            KeyCode::Char(c @ '0'..='9') => {
                let target = c as u8 - b'0';
                let _ = self.session.set_column(self.selected.index(), target, now);
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.status_message = "Abacus cleared".to_string();
            }
            KeyCode::Char('l') => {
                self.session.start_lesson();
                self.status_message = "Lesson started".to_string();
            }
            KeyCode::Char('c') if self.session.lesson_state().is_active() => {
                self.session.check_lesson();
                self.status_message = if self.session.lesson_state().is_active() {
                    "Checked".to_string()
                } else {
                    "Lesson finished".to_string()
                };
            }
            KeyCode::Char('x') if self.session.lesson_state().is_active() => {
                self.session.quit_lesson();
                self.status_message = "Lesson stopped".to_string();
            }
            KeyCode::Char('v') => {
                let on = self.session.toggle_voice();
                self.status_message = format!("Voice {}", if on { "on" } else { "off" });
            }
            KeyCode::Char('s') => {
                let on = self.session.toggle_sound();
                self.status_message = format!("Sound {}", if on { "on" } else { "off" });
            }
            KeyCode::Char('m') => {
                let level = self.session.cycle_verbosity();
                self.status_message = format!("Chattiness: {}", level);
            }
            KeyCode::Char('u') => {
                self.session.change_user();
                self.session.repeat_player_prompt();
                self.screen = Screen::PlayerPicker;
                self.status_message = "Choose a player".to_string();
            }
            _ => {}
        }
    }

    /// Handle mouse events on the play screen
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if self.screen != Screen::Play {
            return;
        }
        let Some((x, y)) = cell_to_canvas(self.abacus_area, mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_rod = column_at(y);
                if let Some(rod) = self.drag_rod {
                    self.selected = rod;
                }
                debug!(x, y, "press");
                let _ = self.session.press_at(x, y, now);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(rod) = self.drag_rod {
                    let _ = self.session.press_rod(rod, x, now);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.drag_rod = None,
            _ => {}
        }
    }
}

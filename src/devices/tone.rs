//! Bead clicks

use crate::engine::Column;
use std::io::{self, Write};
use tracing::trace;

pub trait ToneOutput {
    fn play_tone(&mut self, column: Column);
}

/// Pitch of the click for each rod; lower rods sound deeper
pub fn tone_frequency(column: Column) -> f32 {
    match column {
        Column::Ones => 1200.0,
        Column::Tens => 800.0,
        Column::Hundreds => 400.0,
        Column::Thousands => 200.0,
    }
}

#[derive(Debug, Default)]
pub struct SilentTone;

impl ToneOutput for SilentTone {
    fn play_tone(&mut self, _column: Column) {}
}

/// Rings the terminal bell. Terminals have one pitch, so the rod's frequency
/// only shows up in the trace log.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl ToneOutput for TerminalBell {
    fn play_tone(&mut self, column: Column) {
        trace!(column = %column, hz = tone_frequency(column), "tone");
        let mut out = io::stdout();
        // Best effort: a lost click is not worth reporting
        let _ = out.write_all(b"\x07").and_then(|_| out.flush());
    }
}

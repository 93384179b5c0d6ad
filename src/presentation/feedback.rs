//! Spoken and written feedback after a bead move

use crate::engine::{total_of, Column, Counts};
use rand::Rng;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How much the abacus says after each move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Only the total
    Quiet,
    /// The changed rod and the total
    #[default]
    Normal,
    /// Normal, sometimes followed by a word of encouragement
    Chatty,
}

impl Verbosity {
    pub const ALL: [Verbosity; 3] = [Verbosity::Quiet, Verbosity::Normal, Verbosity::Chatty];

    /// Cycle Quiet -> Normal -> Chatty -> Quiet
    pub fn next(self) -> Self {
        match self {
            Verbosity::Quiet => Verbosity::Normal,
            Verbosity::Normal => Verbosity::Chatty,
            Verbosity::Chatty => Verbosity::Quiet,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verbosity::Quiet => "Quiet",
            Verbosity::Normal => "Normal",
            Verbosity::Chatty => "Chatty",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verbosity::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown verbosity '{}' (quiet, normal, chatty)", s))
    }
}

pub const ENCOURAGEMENTS: [&str; 4] = [
    "Great counting!",
    "You are doing brilliant!",
    "Maths is fun!",
    "Well done!",
];

/// Chance that a chatty sentence ends with an encouragement
pub const ENCOURAGEMENT_PROBABILITY: f64 = 0.4;

/// Sentence describing the abacus right after `changed` was moved.
///
/// The rng is only consulted at [`Verbosity::Chatty`].
pub fn feedback_text<R: Rng>(
    changed: Column,
    counts: &Counts,
    verbosity: Verbosity,
    user: Option<&str>,
    rng: &mut R,
) -> String {
    let total = total_of(counts);
    if verbosity == Verbosity::Quiet {
        return format!("Total is {}.", total);
    }

    let subject = match user {
        Some(name) => format!("{}, you have", name),
        None => "You have".to_string(),
    };
    let mut text = format!(
        "{} {} on the {} column. That makes {} altogether.",
        subject,
        counts[changed.index()],
        changed.name().to_lowercase(),
        total
    );

    if verbosity == Verbosity::Chatty && rng.random_bool(ENCOURAGEMENT_PROBABILITY) {
        let phrase = ENCOURAGEMENTS[rng.random_range(0..ENCOURAGEMENTS.len())];
        text.push(' ');
        text.push_str(phrase);
    }
    text
}

/// `Thousands: a  Hundreds: b  Tens: c  Ones: d`
pub fn column_breakdown(counts: &Counts) -> String {
    Column::ALL
        .iter()
        .rev()
        .map(|column| format!("{}: {}", column.name(), counts[column.index()]))
        .collect::<Vec<_>>()
        .join("  ")
}

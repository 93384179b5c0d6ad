//! Rejection types for the counter engine
//!
//! This module defines [`Rejection`], the reason a requested column change was
//! not applied. None of these are failures the player ever sees: the session
//! treats every rejection as a silent no-op, so a stray click or an impatient
//! drag during a carry simply does nothing.

use thiserror::Error;

/// Why a column change was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Column index outside `0..=3` or target count outside `0..=10`
    #[error("invalid input: column {column}, count {count}")]
    InvalidInput { column: usize, count: u8 },

    /// A carry is waiting to be applied
    #[error("a carry is in progress")]
    Busy,

    /// The rod already holds the requested count
    #[error("rod already shows {count}")]
    NoOp { count: u8 },
}

//! Counter engine for the four-rod abacus
//!
//! This module owns the bead counts and nothing else:
//! - [`abacus`]: the [`Abacus`] state, column updates and carry resolution
//! - [`column`]: rod identities and place values
//! - [`errors`]: why a column change was ignored
//! - [`timer`]: scheduled carry tasks and the queue that holds them
//!
//! # Carry model
//!
//! A rod that reaches ten beads is not emptied immediately. The engine raises
//! its carrying flag and returns a [`ScheduledCarry`] due after the carry
//! delay, during which every column change is rejected as busy. Applying the
//! task empties the rod, adds a bead to the next one, and looks for the next
//! full rod, so a cascade unfolds one visible step at a time.

pub mod abacus;
pub mod column;
pub mod constants;
pub mod errors;
pub mod timer;

pub use abacus::{total_of, Abacus, CarryOutcome, ColumnChange, Counts};
pub use column::Column;
pub use errors::Rejection;
pub use timer::{CarryTimer, ScheduledCarry};

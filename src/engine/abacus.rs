// Counter engine: bead counts, carry detection and resolution

use super::column::Column;
use super::constants::{
    BEADS_PER_ROD, COLUMNS, DEFAULT_CARRY_DELAY, LAST_CARRYING_COLUMN, MIN_CARRY_DELAY,
};
use super::errors::Rejection;
use super::timer::ScheduledCarry;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Bead counts for every rod, least significant first
pub type Counts = [u8; COLUMNS];

/// Represented value `Σ counts[i] * 10^i`
pub fn total_of(counts: &Counts) -> u32 {
    Column::ALL
        .iter()
        .map(|column| counts[column.index()] as u32 * column.multiplier())
        .sum()
}

/// An accepted column change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnChange {
    pub column: Column,
    pub previous: u8,
    pub current: u8,
    /// Carry triggered by this change, if the rod (or a lower one) is full
    pub carry: Option<ScheduledCarry>,
}

/// Result of firing a scheduled carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarryOutcome {
    /// The carry moved one bead up a rod
    Applied {
        from: Column,
        to: Column,
        /// Follow-up carry when the receiving rod filled up in turn
        next: Option<ScheduledCarry>,
    },
    /// The engine was reset after the task was scheduled
    Stale,
}

/// The four-rod abacus
#[derive(Debug, Clone)]
pub struct Abacus {
    counts: Counts,
    carrying: bool,
    /// Advanced by every reset so that carries scheduled before it are ignored
    generation: u64,
    carry_delay: Duration,
}

impl Abacus {
    pub fn new() -> Self {
        Self::with_carry_delay(DEFAULT_CARRY_DELAY)
    }

    /// Delays shorter than [`MIN_CARRY_DELAY`] are raised to it.
    pub fn with_carry_delay(carry_delay: Duration) -> Self {
        Abacus {
            counts: [0; COLUMNS],
            carrying: false,
            generation: 0,
            carry_delay: carry_delay.max(MIN_CARRY_DELAY),
        }
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    pub fn count(&self, column: Column) -> u8 {
        self.counts[column.index()]
    }

    pub fn total(&self) -> u32 {
        total_of(&self.counts)
    }

    pub fn is_carrying(&self) -> bool {
        self.carrying
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn carry_delay(&self) -> Duration {
        self.carry_delay
    }

    /// Move beads on one rod so that `target` of them sit on the counting side.
    ///
    /// A target of 10 is accepted: it leaves the rod visibly full until the
    /// carry it schedules collapses it.
    pub fn set_column(
        &mut self,
        column: usize,
        target: u8,
        now: Instant,
    ) -> Result<ColumnChange, Rejection> {
        if self.carrying {
            return Err(Rejection::Busy);
        }
        let rod = match Column::from_index(column) {
            Some(rod) if target <= BEADS_PER_ROD => rod,
            _ => {
                return Err(Rejection::InvalidInput {
                    column,
                    count: target,
                })
            }
        };

        let previous = self.counts[column];
        if previous == target {
            return Err(Rejection::NoOp { count: target });
        }

        self.counts[column] = target;
        debug!(column = %rod, previous, current = target, "rod changed");

        let carry = self.resolve_carries(now);
        Ok(ColumnChange {
            column: rod,
            previous,
            current: target,
            carry,
        })
    }

    /// Look for the lowest full rod that can carry and schedule its carry.
    ///
    /// Only one carry is ever pending; the next link of a cascade is found
    /// when this one is applied.
    pub fn resolve_carries(&mut self, now: Instant) -> Option<ScheduledCarry> {
        let column = (0..=LAST_CARRYING_COLUMN)
            .find(|&i| self.counts[i] >= BEADS_PER_ROD)
            .and_then(Column::from_index)?;

        self.carrying = true;
        trace!(column = %column, generation = self.generation, "carry scheduled");
        Some(ScheduledCarry {
            column,
            generation: self.generation,
            due: now + self.carry_delay,
        })
    }

    /// Fire a scheduled carry: empty the full rod and add one bead to the next.
    pub fn apply_carry(&mut self, task: ScheduledCarry, now: Instant) -> CarryOutcome {
        if task.generation != self.generation {
            debug!(
                column = %task.column,
                task_generation = task.generation,
                generation = self.generation,
                "discarding stale carry"
            );
            return CarryOutcome::Stale;
        }
        let Some(to) = task.column.next() else {
            // Thousands never schedules a carry
            self.carrying = false;
            return CarryOutcome::Stale;
        };

        let from = task.column;
        self.counts[from.index()] = 0;
        let receiving = &mut self.counts[to.index()];
        // A full Thousands rod has no eleventh bead; the carried one is dropped
        *receiving = (*receiving + 1).min(BEADS_PER_ROD);
        self.carrying = false;
        debug!(from = %from, to = %to, total = self.total(), "carry applied");

        let next = self.resolve_carries(now);
        CarryOutcome::Applied { from, to, next }
    }

    /// Clear every rod. Always allowed, even while a carry is pending.
    pub fn reset(&mut self) {
        self.counts = [0; COLUMNS];
        self.carrying = false;
        self.generation = self.generation.wrapping_add(1);
        debug!(generation = self.generation, "abacus reset");
    }
}

impl Default for Abacus {
    fn default() -> Self {
        Self::new()
    }
}

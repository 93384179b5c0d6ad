// Constants for the counter engine

use std::time::Duration;

/// Number of rods on the frame (Ones, Tens, Hundreds, Thousands)
pub const COLUMNS: usize = 4;

/// Beads threaded on every rod
pub const BEADS_PER_ROD: u8 = 10;

/// Highest column that can hand a carry to its neighbour.
/// Thousands has nowhere to carry to and keeps its tenth bead.
pub const LAST_CARRYING_COLUMN: usize = COLUMNS - 2;

/// Time a full rod stays visible before it collapses into a carry
pub const DEFAULT_CARRY_DELAY: Duration = Duration::from_millis(500);

/// Shortest carry delay accepted; every cascade step stays on screen this long
pub const MIN_CARRY_DELAY: Duration = Duration::from_millis(100);

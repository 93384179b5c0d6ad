//! Bead geometry and pointer mapping on the virtual canvas
//!
//! All coordinates live on a fixed 700 × 500 canvas with the origin at the
//! top-left corner and y growing downwards. The UI scales terminal cells onto
//! this canvas before asking anything of this module, so the mapping rules
//! here are independent of the terminal size.
//!
//! # Rods
//!
//! The four rods are stacked top to bottom, Ones first, each centred in an
//! equal horizontal band. Beads on the counting (left) side are packed
//! against an inner offset; the rest are packed against the right edge, so a
//! change moves a contiguous block of beads.

use crate::engine::constants::{BEADS_PER_ROD, COLUMNS};
use crate::engine::{Column, Counts};

pub const CANVAS_WIDTH: f64 = 700.0;
pub const CANVAS_HEIGHT: f64 = 500.0;
pub const PADDING: f64 = 60.0;
pub const BEAD_WIDTH: f64 = 40.0;
pub const BEAD_HEIGHT: f64 = 35.0;
pub const ROD_THICKNESS: f64 = 8.0;
/// Horizontal room one bead takes, including its gap
pub const SLOT_WIDTH: f64 = BEAD_WIDTH + 4.0;
/// Empty stretch of rod to the left of the first counted bead
pub const EXTRA_LEFT: f64 = 60.0;

/// Where counted beads start
pub const LEFT_ANCHOR: f64 = PADDING + EXTRA_LEFT;
/// Where the block of ten uncounted beads starts
pub const RIGHT_ANCHOR: f64 = CANVAS_WIDTH - PADDING - BEADS_PER_ROD as f64 * SLOT_WIDTH;

/// Which end of the rod a bead rests at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeadSide {
    /// Counted towards the rod's value
    Active,
    Inactive,
}

/// What a pointer landed on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerTarget {
    Bead { column: Column, bead: u8 },
    Rod { column: Column, x: f64 },
}

/// Height of the band each rod owns
pub fn rod_spacing() -> f64 {
    (CANVAS_HEIGHT - PADDING * 2.0) / COLUMNS as f64
}

/// Vertical centre of a rod
pub fn rod_center_y(column: Column) -> f64 {
    PADDING + column.index() as f64 * rod_spacing() + rod_spacing() / 2.0
}

pub fn bead_side(bead: u8, count: u8) -> BeadSide {
    if bead < count {
        BeadSide::Active
    } else {
        BeadSide::Inactive
    }
}

/// Left edge of bead `bead` on a rod holding `count`. Indices past the last
/// bead are treated as the last bead.
pub fn bead_x(bead: u8, count: u8) -> f64 {
    let bead = bead.min(BEADS_PER_ROD - 1);
    match bead_side(bead, count) {
        BeadSide::Active => LEFT_ANCHOR + bead as f64 * SLOT_WIDTH,
        BeadSide::Inactive => {
            CANVAS_WIDTH - PADDING - (BEADS_PER_ROD - bead) as f64 * SLOT_WIDTH
        }
    }
}

/// Target count for a press at horizontal position `x` on a rod.
///
/// Presses on the left half measure from the counted-bead anchor and round
/// up; presses on the right half measure from the uncounted block and round
/// down. Either way the switch from n to n + 1 beads happens at the middle of
/// bead n + 1.
pub fn count_from_pointer(x: f64) -> u8 {
    let slots = if x < CANVAS_WIDTH / 2.0 {
        ((x - LEFT_ANCHOR) / SLOT_WIDTH).ceil()
    } else {
        ((x - RIGHT_ANCHOR) / SLOT_WIDTH).floor()
    };
    slots.clamp(0.0, BEADS_PER_ROD as f64) as u8
}

/// Target count for a click on a single bead: a counted bead and everything
/// after it slide back, an uncounted bead and everything before it slide over.
pub fn count_for_bead_click(bead: u8, count: u8) -> u8 {
    match bead_side(bead, count) {
        BeadSide::Active => bead,
        BeadSide::Inactive => bead.saturating_add(1),
    }
}

/// Rod whose hit band contains `y`
pub fn column_at(y: f64) -> Option<Column> {
    if !(PADDING..CANVAS_HEIGHT - PADDING).contains(&y) {
        return None;
    }
    Column::from_index(((y - PADDING) / rod_spacing()) as usize)
}

/// Resolve a canvas position to a bead, a rod, or nothing.
pub fn hit_test(x: f64, y: f64, counts: &Counts) -> Option<PointerTarget> {
    if !(PADDING..CANVAS_WIDTH - PADDING).contains(&x) {
        return None;
    }
    let column = column_at(y)?;
    let count = counts[column.index()];
    let top = rod_center_y(column) - BEAD_HEIGHT / 2.0;

    if (top..top + BEAD_HEIGHT).contains(&y) {
        let bead = (0..BEADS_PER_ROD).find(|&bead| {
            let left = bead_x(bead, count);
            (left..left + BEAD_WIDTH).contains(&x)
        });
        if let Some(bead) = bead {
            return Some(PointerTarget::Bead { column, bead });
        }
    }
    Some(PointerTarget::Rod { column, x })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors() {
        assert_eq!(LEFT_ANCHOR, 120.0);
        assert_eq!(RIGHT_ANCHOR, 200.0);
    }

    #[test]
    fn test_bead_positions_for_three() {
        assert_eq!(bead_x(0, 3), 120.0);
        assert_eq!(bead_x(2, 3), 208.0);
        // first uncounted bead keeps its slot in the right-hand block
        assert_eq!(bead_x(3, 3), 332.0);
        assert_eq!(bead_x(9, 3), 596.0);
    }

    #[test]
    fn test_bead_index_past_the_rod() {
        assert_eq!(bead_x(10, 3), bead_x(9, 3));
        assert_eq!(bead_x(u8::MAX, 10), bead_x(9, 10));
        assert_eq!(count_for_bead_click(u8::MAX, 0), u8::MAX);
    }

    #[test]
    fn test_pointer_extremes_clamp() {
        assert_eq!(count_from_pointer(0.0), 0);
        assert_eq!(count_from_pointer(CANVAS_WIDTH), BEADS_PER_ROD);
    }

    #[test]
    fn test_bead_click() {
        assert_eq!(count_for_bead_click(1, 4), 1);
        assert_eq!(count_for_bead_click(6, 4), 7);
    }

    #[test]
    fn test_rod_bands() {
        assert_eq!(column_at(PADDING - 1.0), None);
        assert_eq!(column_at(rod_center_y(Column::Tens)), Some(Column::Tens));
        assert_eq!(column_at(CANVAS_HEIGHT - PADDING), None);
    }

    #[test]
    fn test_hit_bead_and_rod() {
        let counts = [2, 0, 0, 0];
        let y = rod_center_y(Column::Ones);

        assert_eq!(
            hit_test(125.0, y, &counts),
            Some(PointerTarget::Bead {
                column: Column::Ones,
                bead: 0
            })
        );
        assert_eq!(
            hit_test(80.0, y, &counts),
            Some(PointerTarget::Rod {
                column: Column::Ones,
                x: 80.0
            })
        );
        assert_eq!(hit_test(10.0, y, &counts), None);
    }
}

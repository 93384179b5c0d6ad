// Pointer-to-count mapping and bead layout on the virtual canvas

use abacus_tty::engine::Column;
use abacus_tty::presentation::layout::{
    bead_x, count_for_bead_click, count_from_pointer, hit_test, rod_center_y, BEAD_WIDTH,
    CANVAS_WIDTH, LEFT_ANCHOR, RIGHT_ANCHOR, SLOT_WIDTH,
};
use abacus_tty::presentation::PointerTarget;

/// Centre of the slot for bead `n` (0-based) measured from `anchor`
fn slot_midpoint(anchor: f64, n: u8) -> f64 {
    anchor + n as f64 * SLOT_WIDTH + SLOT_WIDTH / 2.0
}

#[test]
fn test_left_anchor_rounds_up() {
    // Midway through the slot of bead index 2 (the third bead)
    let x = slot_midpoint(LEFT_ANCHOR, 2);
    assert!(x < CANVAS_WIDTH / 2.0);
    assert_eq!(count_from_pointer(x), 3);
}

#[test]
fn test_right_anchor_rounds_down() {
    let x = slot_midpoint(RIGHT_ANCHOR, 5);
    assert!(x >= CANVAS_WIDTH / 2.0);
    assert_eq!(count_from_pointer(x), 5);
}

#[test]
fn test_left_half_sweep_is_monotonic() {
    let mut previous = 0;
    let mut x = 0.0;
    while x < CANVAS_WIDTH / 2.0 {
        let count = count_from_pointer(x);
        assert!(count >= previous, "count fell at x = {}", x);
        assert!(count <= 10);
        previous = count;
        x += 1.0;
    }
}

#[test]
fn test_right_edge_is_ten() {
    assert_eq!(count_from_pointer(RIGHT_ANCHOR + 10.0 * SLOT_WIDTH), 10);
    assert_eq!(count_from_pointer(CANVAS_WIDTH - 1.0), 10);
}

#[test]
fn test_beads_move_as_a_block() {
    // Counted beads are contiguous from the left anchor
    for bead in 0..4u8 {
        assert_eq!(bead_x(bead, 4), LEFT_ANCHOR + bead as f64 * SLOT_WIDTH);
    }
    // Uncounted beads keep their slots against the right edge
    for bead in 4..10u8 {
        assert_eq!(bead_x(bead, 4), RIGHT_ANCHOR + bead as f64 * SLOT_WIDTH);
    }
}

#[test]
fn test_bead_click_targets() {
    // Clicking a counted bead sends it and everything after it back
    assert_eq!(count_for_bead_click(0, 3), 0);
    assert_eq!(count_for_bead_click(2, 3), 2);
    // Clicking an uncounted bead brings it and everything before it over
    assert_eq!(count_for_bead_click(3, 3), 4);
    assert_eq!(count_for_bead_click(9, 0), 10);
}

#[test]
fn test_hit_test_finds_uncounted_bead() {
    let counts = [0, 0, 0, 0];
    let y = rod_center_y(Column::Hundreds);
    let x = bead_x(7, 0) + BEAD_WIDTH / 2.0;

    assert_eq!(
        hit_test(x, y, &counts),
        Some(PointerTarget::Bead {
            column: Column::Hundreds,
            bead: 7
        })
    );
}

#[test]
fn test_hit_test_between_rods_uses_band() {
    let counts = [0, 0, 0, 0];
    // Just above the Tens beads but still inside its band
    let y = rod_center_y(Column::Tens) - 30.0;

    assert_eq!(
        hit_test(300.0, y, &counts),
        Some(PointerTarget::Rod {
            column: Column::Tens,
            x: 300.0
        })
    );
}

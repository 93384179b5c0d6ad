// Counter engine behaviour: column updates, carries and cascades

use abacus_tty::engine::{
    total_of, Abacus, CarryOutcome, CarryTimer, Column, Counts, Rejection,
};
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(500);

/// Fire carries until the timer is empty, checking the total on every step.
/// Returns the number of carries applied and the state after each one.
fn drain(abacus: &mut Abacus, timer: &mut CarryTimer, start: Instant) -> (usize, Vec<Counts>) {
    let mut now = start;
    let mut steps = Vec::new();
    while let Some(due) = timer.next_due() {
        // Nothing fires early
        assert_eq!(timer.pop_due(due - Duration::from_millis(1)), None);
        now = now.max(due);
        let task = timer.pop_due(now).expect("task due");
        match abacus.apply_carry(task, now) {
            CarryOutcome::Applied { next, .. } => {
                steps.push(*abacus.counts());
                assert_eq!(abacus.total(), total_of(abacus.counts()));
                if let Some(next) = next {
                    assert_eq!(next.due, now + DELAY);
                    timer.schedule(next);
                }
            }
            CarryOutcome::Stale => {}
        }
    }
    (steps.len(), steps)
}

/// Build an abacus at rest showing `counts`
fn abacus_with(counts: Counts) -> Abacus {
    let mut abacus = Abacus::with_carry_delay(DELAY);
    let now = Instant::now();
    for column in Column::ALL {
        let target = counts[column.index()];
        if target != 0 {
            abacus.set_column(column.index(), target, now).unwrap();
        }
    }
    abacus
}

#[test]
fn test_set_column_touches_only_that_rod() {
    let mut abacus = abacus_with([3, 1, 4, 1]);
    let now = Instant::now();

    for column in Column::ALL {
        for target in 0..=9u8 {
            let before = *abacus.counts();
            if before[column.index()] == target {
                continue;
            }
            let change = abacus.set_column(column.index(), target, now).unwrap();
            assert_eq!(change.previous, before[column.index()]);
            assert_eq!(change.current, target);

            let after = abacus.counts();
            for other in Column::ALL.iter().filter(|c| **c != column) {
                assert_eq!(after[other.index()], before[other.index()]);
            }
            assert_eq!(after[column.index()], target);
        }
    }
}

#[test]
fn test_setting_current_value_is_noop() {
    let mut abacus = abacus_with([5, 0, 2, 0]);
    let now = Instant::now();

    assert_eq!(
        abacus.set_column(0, 5, now),
        Err(Rejection::NoOp { count: 5 })
    );
    assert_eq!(
        abacus.set_column(1, 0, now),
        Err(Rejection::NoOp { count: 0 })
    );
    assert_eq!(abacus.counts(), &[5, 0, 2, 0]);
    assert!(!abacus.is_carrying());
}

#[test]
fn test_single_carry() {
    let mut abacus = Abacus::with_carry_delay(DELAY);
    let mut timer = CarryTimer::new();
    let start = Instant::now();

    let change = abacus.set_column(0, 10, start).unwrap();
    timer.schedule(change.carry.expect("carry scheduled"));
    assert_eq!(abacus.counts(), &[10, 0, 0, 0]);
    assert_eq!(abacus.total(), 10);

    let (carries, _) = drain(&mut abacus, &mut timer, start);
    assert_eq!(carries, 1);
    assert_eq!(abacus.counts(), &[0, 1, 0, 0]);
    assert!(!abacus.is_carrying());
}

#[test]
fn test_cascade_resolves_one_step_at_a_time() {
    let mut abacus = abacus_with([9, 9, 9, 0]);
    let mut timer = CarryTimer::new();
    let start = Instant::now();

    let change = abacus.set_column(0, 10, start).unwrap();
    timer.schedule(change.carry.expect("carry scheduled"));

    let (carries, steps) = drain(&mut abacus, &mut timer, start);
    assert_eq!(carries, 3);
    assert_eq!(
        steps,
        vec![[0, 10, 9, 0], [0, 0, 10, 0], [0, 0, 0, 1]]
    );
    assert_eq!(abacus.total(), 1000);
    assert!(!abacus.is_carrying());
}

#[test]
fn test_busy_during_carry() {
    let mut abacus = Abacus::with_carry_delay(DELAY);
    let start = Instant::now();
    let change = abacus.set_column(1, 10, start).unwrap();

    assert!(abacus.is_carrying());
    assert_eq!(abacus.set_column(0, 3, start), Err(Rejection::Busy));
    assert_eq!(abacus.set_column(9, 3, start), Err(Rejection::Busy));

    let task = change.carry.unwrap();
    assert!(matches!(
        abacus.apply_carry(task, task.due),
        CarryOutcome::Applied {
            from: Column::Tens,
            to: Column::Hundreds,
            next: None
        }
    ));
    assert!(abacus.set_column(0, 3, task.due).is_ok());
}

#[test]
fn test_thousands_stays_at_ten() {
    let mut abacus = abacus_with([0, 0, 0, 9]);
    let change = abacus.set_column(3, 10, Instant::now()).unwrap();

    assert_eq!(change.carry, None);
    assert!(!abacus.is_carrying());
    assert_eq!(abacus.counts(), &[0, 0, 0, 10]);
    assert_eq!(abacus.total(), 10_000);
}

#[test]
fn test_carry_into_full_thousands_saturates() {
    let mut abacus = abacus_with([0, 0, 9, 10]);
    let start = Instant::now();
    let change = abacus.set_column(2, 10, start).unwrap();

    let task = change.carry.unwrap();
    abacus.apply_carry(task, task.due);
    assert_eq!(abacus.counts(), &[0, 0, 0, 10]);
}

#[test]
fn test_reset_mid_carry_discards_stale_task() {
    let mut abacus = abacus_with([9, 9, 0, 0]);
    let start = Instant::now();
    let task = abacus.set_column(0, 10, start).unwrap().carry.unwrap();

    abacus.reset();
    assert_eq!(abacus.counts(), &[0, 0, 0, 0]);
    assert!(!abacus.is_carrying());

    // Interaction resumes before the old timer fires
    abacus.set_column(0, 7, start).unwrap();
    assert_eq!(abacus.apply_carry(task, task.due), CarryOutcome::Stale);
    assert_eq!(abacus.counts(), &[7, 0, 0, 0]);
}

#[test]
fn test_invalid_input_changes_nothing() {
    let mut abacus = abacus_with([1, 2, 3, 4]);
    let now = Instant::now();

    assert!(matches!(
        abacus.set_column(7, 1, now),
        Err(Rejection::InvalidInput { .. })
    ));
    assert!(matches!(
        abacus.set_column(1, 200, now),
        Err(Rejection::InvalidInput { .. })
    ));
    assert_eq!(abacus.counts(), &[1, 2, 3, 4]);
}

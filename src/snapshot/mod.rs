// Read-only view of the abacus handed to the renderer after every change

use crate::engine::{total_of, Abacus, Counts};
use crate::lesson::LessonState;

/// State of the abacus at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub counts: Counts,
    pub total: u32,
    pub is_carrying: bool,
    pub lesson: LessonState,
}

impl Snapshot {
    pub fn capture(abacus: &Abacus, lesson: LessonState) -> Self {
        Snapshot {
            counts: *abacus.counts(),
            total: abacus.total(),
            is_carrying: abacus.is_carrying(),
            lesson,
        }
    }

    /// Whether `total` agrees with the counts it was captured from
    pub fn is_consistent(&self) -> bool {
        self.total == total_of(&self.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_capture_mid_carry() {
        let mut abacus = Abacus::new();
        abacus.set_column(0, 10, Instant::now()).unwrap();

        let snapshot = Snapshot::capture(&abacus, LessonState::Idle);
        assert_eq!(snapshot.counts, [10, 0, 0, 0]);
        assert_eq!(snapshot.total, 10);
        assert!(snapshot.is_carrying);
        assert!(snapshot.is_consistent());
    }
}

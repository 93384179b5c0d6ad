//! The "2 plus 2" lesson
//!
//! A tiny scripted state machine. The player asks the abacus to check their
//! work; each check either advances to the next step or repeats a corrective
//! prompt. Starting a lesson clears the abacus (the session does that), and
//! quitting leaves the beads where they are.

use crate::engine::Counts;
use tracing::debug;

/// Identifier of the only script
pub const SCRIPT_ID: &str = "2plus2";

pub const INTRO: &str = "Let's learn 2 plus 2. First, clear the abacus.";

/// Where the player is in the lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonState {
    /// No lesson running
    #[default]
    Idle,
    AwaitClear,
    AwaitTwo,
    AwaitFour,
    Complete,
}

impl LessonState {
    pub fn is_active(self) -> bool {
        self != LessonState::Idle
    }

    /// Position in the script, `None` when idle
    pub fn step_index(self) -> Option<usize> {
        match self {
            LessonState::Idle => None,
            LessonState::AwaitClear => Some(0),
            LessonState::AwaitTwo => Some(1),
            LessonState::AwaitFour => Some(2),
            LessonState::Complete => Some(3),
        }
    }

    /// Instruction shown on screen for this step
    pub fn instruction(self) -> Option<&'static str> {
        match self {
            LessonState::Idle => None,
            LessonState::AwaitClear => Some("Clear the abacus to start!"),
            LessonState::AwaitTwo => Some("Move 2 beads to the left on the top row (Ones)."),
            LessonState::AwaitFour => Some("Now add 2 more beads to the left."),
            LessonState::Complete => Some("Well done! 2 plus 2 equals 4!"),
        }
    }
}

/// Result of pressing "check"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The step's goal was met
    Advanced {
        to: LessonState,
        message: &'static str,
    },
    /// Not yet; stay on the step
    Retry { message: &'static str },
    /// The final check after completion ended the lesson
    Finished { message: &'static str },
    /// No lesson is running
    Inactive,
}

impl CheckOutcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CheckOutcome::Advanced { message, .. }
            | CheckOutcome::Retry { message }
            | CheckOutcome::Finished { message } => Some(message),
            CheckOutcome::Inactive => None,
        }
    }
}

/// A running (or idle) lesson
#[derive(Debug, Clone, Default)]
pub struct Lesson {
    state: LessonState,
}

impl Lesson {
    pub fn new() -> Self {
        Lesson {
            state: LessonState::Idle,
        }
    }

    pub fn state(&self) -> LessonState {
        self.state
    }

    pub fn script_id(&self) -> Option<&'static str> {
        self.state.is_active().then_some(SCRIPT_ID)
    }

    /// Enter the first step. The caller is responsible for clearing the abacus.
    pub fn start(&mut self) -> &'static str {
        self.state = LessonState::AwaitClear;
        debug!(script = SCRIPT_ID, "lesson started");
        INTRO
    }

    pub fn quit(&mut self) {
        if self.state.is_active() {
            debug!(script = SCRIPT_ID, state = ?self.state, "lesson quit");
        }
        self.state = LessonState::Idle;
    }

    /// Compare the abacus against the current step's goal.
    pub fn check(&mut self, counts: &Counts) -> CheckOutcome {
        let outcome = match self.state {
            LessonState::Idle => CheckOutcome::Inactive,
            LessonState::AwaitClear => {
                if counts.iter().all(|&c| c == 0) {
                    CheckOutcome::Advanced {
                        to: LessonState::AwaitTwo,
                        message: "Brilliant. Step one: move 2 beads on the Ones column.",
                    }
                } else {
                    CheckOutcome::Retry {
                        message: "Not quite. Move everything to the right first.",
                    }
                }
            }
            LessonState::AwaitTwo => {
                if counts[0] == 2 {
                    CheckOutcome::Advanced {
                        to: LessonState::AwaitFour,
                        message: "Perfect. Now add 2 more beads on the same column.",
                    }
                } else {
                    CheckOutcome::Retry {
                        message: "You need to move exactly 2 beads.",
                    }
                }
            }
            LessonState::AwaitFour => {
                if counts[0] == 4 {
                    CheckOutcome::Advanced {
                        to: LessonState::Complete,
                        message: "Well done! 2 plus 2 equals 4. You are a maths star!",
                    }
                } else {
                    CheckOutcome::Retry {
                        message: "Count again! We want 4 on the left.",
                    }
                }
            }
            LessonState::Complete => CheckOutcome::Finished {
                message: "Lesson complete!",
            },
        };

        match outcome {
            CheckOutcome::Advanced { to, .. } => self.state = to,
            CheckOutcome::Finished { .. } => self.state = LessonState::Idle,
            CheckOutcome::Retry { .. } | CheckOutcome::Inactive => {}
        }
        debug!(state = ?self.state, ?outcome, "lesson checked");
        outcome
    }
}

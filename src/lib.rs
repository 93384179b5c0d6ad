//! # Introduction
//!
//! A four-rod counting abacus for the terminal. Beads are moved with the
//! mouse or the keyboard; a full rod of ten collapses into one bead on the
//! next rod after a short pause, so a learner can watch each carry happen.
//! An optional voice reads out what changed, and a short scripted lesson
//! walks through 2 + 2.
//!
//! ## Pipeline
//!
//! ```text
//! Pointer/key → Presentation (target count) → Session → Engine → Snapshot → TUI
//! ```
//!
//! 1. [`engine`]: bead counts, column updates, delayed carry resolution.
//! 2. [`presentation`]: bead layout, pointer mapping, scene building and
//!    feedback sentences. Pure functions of engine state.
//! 3. [`lesson`]: the "2 plus 2" lesson state machine.
//! 4. [`session`]: owns an engine, the carry queue, the lesson and the
//!    collaborators in [`devices`]; the one thing the UI talks to.
//! 5. [`snapshot`]: the read-only view rendered after every change.
//! 6. [`config`]: startup settings from defaults, TOML and environment.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod devices;
pub mod engine;
pub mod lesson;
pub mod presentation;
pub mod session;
pub mod snapshot;
pub mod ui;

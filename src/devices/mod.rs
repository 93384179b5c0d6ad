//! Collaborators the session talks to but does not own the behaviour of
//!
//! - [`identity`]: key-value store for the chosen player name
//! - [`speech`]: reads sentences aloud, newest request wins
//! - [`tone`]: short click when beads move
//!
//! Each is a trait so the session can be driven in tests with recording
//! doubles and in the terminal with real (best-effort) implementations.

pub mod identity;
pub mod speech;
pub mod tone;

pub use identity::{FileIdentityStore, IdentityStore, MemoryIdentityStore, StoreError};
pub use speech::{CommandSpeech, SilentSpeech, SpeechOutput};
pub use tone::{tone_frequency, SilentTone, TerminalBell, ToneOutput};

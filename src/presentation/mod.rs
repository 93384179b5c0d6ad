//! Presentation adapter: from engine state to pixels and words
//!
//! - [`layout`]: canvas geometry, bead placement, pointer-to-count mapping and
//!   hit testing
//! - [`scene`]: the draw calls for a given set of counts
//! - [`feedback`]: the sentence spoken or shown after each move
//!
//! Nothing in here mutates the engine. Pointer input is turned into a target
//! count and handed to the session, which forwards it to the engine.

pub mod feedback;
pub mod layout;
pub mod scene;

pub use feedback::{column_breakdown, feedback_text, Verbosity};
pub use layout::{count_for_bead_click, count_from_pointer, hit_test, BeadSide, PointerTarget};
pub use scene::{build_scene, Scene, Shape};

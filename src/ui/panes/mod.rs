//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function taking the frame, its area and
//! the data it shows.
//!
//! - [`abacus`]: the rods and beads on a canvas
//! - [`summary`]: player badge, total, breakdown, preferences
//! - [`bubble`]: lesson instruction or move feedback, plus the teacher's last line
//! - [`status`]: status bar with keybindings
//! - [`picker`]: splash and player-picker screens

pub mod abacus;
pub mod bubble;
pub mod picker;
pub mod status;
pub mod summary;

pub use abacus::render_abacus_pane;
pub use bubble::render_bubble_pane;
pub use picker::{render_player_picker, render_splash};
pub use status::render_status_bar;
pub use summary::render_summary_pane;

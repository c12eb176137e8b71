//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`display`]: The calculator display with the pending expression above it
//! - [`keypad`]: The clickable button grid
//! - [`status`]: Status bar with keybindings
//!
//! Each pane module exports a `render_*` function that draws from borrowed
//! state and keeps nothing between frames.

pub mod display;
pub mod keypad;
pub mod status;

pub use display::render_display_pane;
pub use keypad::render_keypad_pane;
pub use status::render_status_bar;

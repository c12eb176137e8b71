//! # Introduction
//!
//! calctty is a four-function calculator for the terminal. It keeps a small
//! input/accumulator state machine driven by key presses and keypad clicks,
//! and renders the current value to a display pane built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Input pipeline
//!
//! ```text
//! Key / Click → Input → Session → Calculator → DisplaySink → TUI
//! ```
//!
//! 1. [`input`] — decodes keys and button `(action, value)` attributes into
//!    [`input::Input`] events.
//! 2. [`engine`] — the [`engine::Calculator`] state machine: digit entry,
//!    pending operation, evaluation, delete/negate/percent.
//! 3. [`session`] — binds one calculator to one [`display::DisplaySink`]
//!    and applies inputs in arrival order.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use calctty::display::RecordingDisplay;
//! use calctty::session::Session;
//!
//! let mut session = Session::new(RecordingDisplay::new());
//! session.feed_keys("0.1+0.2=");
//! assert_eq!(session.sink().current(), "0.3");
//! ```

pub mod config;
pub mod display;
pub mod engine;
pub mod errors;
pub mod input;
pub mod session;
pub mod ui;

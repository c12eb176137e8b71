//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four parts:
//!
//! - **[`app`]** — application state and the keyboard/mouse event loop
//! - **[`keypad`]** — the button grid: attributes, layout and hit testing
//! - **[`panes`]** — stateless render functions for the display, keypad and status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it and call
//! [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod keypad;
pub mod panes;
pub mod theme;

pub use app::App;

//! Calculator engine
//!
//! This module provides the calculator state machine:
//! - [`state`]: The operand/operator state and the error entry
//! - [`number`]: Parsing, rounding and formatting of operands
//! - [`calculator`]: The [`Calculator`] with one operation per input kind
//!
//! # Entry Model
//!
//! The value being typed is kept as text, not as a float. This preserves the
//! exact digits the user sees, including in-progress forms such as `"12."` or
//! `"-0."`. Operands are only parsed when an operation needs their numeric
//! value (`compute`, `apply_percent`).
//!
//! # Error Handling
//!
//! No operation fails. Division by zero produces the [`Entry::DivisionByZero`]
//! entry, displayed as `"Error"`; operands that cannot be parsed turn the
//! operation into a no-op.

pub mod calculator;
pub mod number;
pub mod state;

pub use calculator::{Calculator, Render};
pub use state::{CalculatorState, Entry, Operator};

//! Discrete calculator inputs and their decoders
//!
//! An [`Input`] is produced by one of two sources:
//! - a keypad button, described by its `(action, value)` attribute pair
//!   (see [`Input::from_action`])
//! - a keyboard key (see [`Input::from_char`] and [`Input::from_key`])
//!
//! Keys without a mapping decode to `None` and are ignored by the caller.

use crate::engine::state::{Operator, ParseOperatorError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use thiserror::Error;

/// One calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// A digit `0..=9`
    Digit(u8),
    Decimal,
    Operate(Operator),
    Equals,
    Clear,
    Delete,
    Negate,
    Percent,
}

/// Errors decoding a button's `(action, value)` attributes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("action '{action}' requires a value")]
    MissingValue { action: String },

    #[error("invalid digit '{0}'")]
    InvalidDigit(String),

    #[error(transparent)]
    InvalidOperator(#[from] ParseOperatorError),
}

impl Input {
    /// Decode a button's action tag and optional value.
    ///
    /// | action  | value          |
    /// |---------|----------------|
    /// | digit   | `"0"`..`"9"`   |
    /// | decimal | -              |
    /// | operate | `+ - * /`      |
    /// | equals, clear, delete, negate, percent | - |
    pub fn from_action(action: &str, value: Option<&str>) -> Result<Self, InputError> {
        let require_value = || {
            value.ok_or_else(|| InputError::MissingValue {
                action: action.to_string(),
            })
        };

        match action {
            "digit" => {
                let value = require_value()?;
                match value.as_bytes() {
                    [b @ b'0'..=b'9'] => Ok(Input::Digit(b - b'0')),
                    _ => Err(InputError::InvalidDigit(value.to_string())),
                }
            }
            "decimal" => Ok(Input::Decimal),
            "operate" => Ok(Input::Operate(require_value()?.parse()?)),
            "equals" => Ok(Input::Equals),
            "clear" => Ok(Input::Clear),
            "delete" => Ok(Input::Delete),
            "negate" => Ok(Input::Negate),
            "percent" => Ok(Input::Percent),
            other => Err(InputError::UnknownAction(other.to_string())),
        }
    }

    /// The `(action, value)` pair that decodes back to this input
    pub fn action(&self) -> (&'static str, Option<String>) {
        match self {
            Input::Digit(d) => ("digit", Some(d.to_string())),
            Input::Decimal => ("decimal", None),
            Input::Operate(op) => ("operate", Some(op.symbol().to_string())),
            Input::Equals => ("equals", None),
            Input::Clear => ("clear", None),
            Input::Delete => ("delete", None),
            Input::Negate => ("negate", None),
            Input::Percent => ("percent", None),
        }
    }

    /// Map a typed character. `=` is the only printable alias for equals.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Input::Digit(d as u8)),
            '.' => Some(Input::Decimal),
            '=' => Some(Input::Equals),
            '%' => Some(Input::Percent),
            _ => Operator::from_symbol(c).map(Input::Operate),
        }
    }

    /// Map a key press: characters as [`Input::from_char`], plus
    /// `Enter` (equals), `Backspace` (delete) and `Escape` (clear).
    ///
    /// Chords with Control or Alt are not calculator input.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char(c) => Self::from_char(c),
            KeyCode::Enter => Some(Input::Equals),
            KeyCode::Backspace => Some(Input::Delete),
            KeyCode::Esc => Some(Input::Clear),
            _ => None,
        }
    }

    /// Caption shown on the keypad button
    pub fn label(&self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::Decimal => ".".to_string(),
            Input::Operate(Operator::Add) => "+".to_string(),
            Input::Operate(Operator::Subtract) => "−".to_string(),
            Input::Operate(Operator::Multiply) => "×".to_string(),
            Input::Operate(Operator::Divide) => "÷".to_string(),
            Input::Equals => "=".to_string(),
            Input::Clear => "C".to_string(),
            Input::Delete => "⌫".to_string(),
            Input::Negate => "±".to_string(),
            Input::Percent => "%".to_string(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

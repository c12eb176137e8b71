//! Calculator state
//!
//! - [`Operator`]: The four binary operators
//! - [`Entry`]: The value currently being entered or last computed
//! - [`CalculatorState`]: Everything the engine remembers between inputs

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text shown in place of a value when a division by zero occurred
pub const ERROR_TEXT: &str = "Error";

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The operator's ASCII symbol (`+ - * /`)
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Operator for an ASCII symbol, if any
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Evaluate `lhs <op> rhs`.
    ///
    /// Returns `None` for a division by zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(lhs + rhs),
            Operator::Subtract => Some(lhs - rhs),
            Operator::Multiply => Some(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    None
                } else {
                    Some(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returned when a string is not one of `+ - * /`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator '{0}'")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Operator::from_symbol(c).ok_or_else(|| ParseOperatorError(s.to_string()))
            }
            _ => Err(ParseOperatorError(s.to_string())),
        }
    }
}

/// The value in the display slot.
///
/// `Number` always holds a non-empty numeric literal, possibly still being
/// typed (`"0"`, `"-3.5"`, `"12."`), with at most one decimal point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Number(String),
    DivisionByZero,
}

impl Entry {
    /// The initial `"0"` entry
    pub fn zero() -> Self {
        Entry::Number("0".to_string())
    }

    /// Text to display for this entry
    pub fn as_str(&self) -> &str {
        match self {
            Entry::Number(text) => text.as_str(),
            Entry::DivisionByZero => ERROR_TEXT,
        }
    }

    /// The literal, or `None` for the error entry
    pub fn as_number(&self) -> Option<&str> {
        match self {
            Entry::Number(text) => Some(text.as_str()),
            Entry::DivisionByZero => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Entry::DivisionByZero)
    }
}

impl Default for Entry {
    fn default() -> Self {
        Entry::zero()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine state between two inputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorState {
    /// Value being entered or last computed
    pub current: Entry,
    /// Left operand captured when an operator was chosen
    pub previous: Option<String>,
    /// Pending operator; `previous` is `None` whenever this is `None`
    pub operation: Option<Operator>,
    /// Set by a successful `compute`, cleared by the next digit or operator
    pub just_evaluated: bool,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }
}

//! Calculator state machine
//!
//! [`Calculator`] interprets one input at a time against its
//! [`CalculatorState`]. Every operation returns a [`Render`] telling the
//! caller whether the display has to be refreshed.

use super::number::{format_number, parse_operand, round_result};
use super::state::{CalculatorState, Entry, Operator};
use crate::input::Input;
use tracing::{debug, trace};

/// Whether an operation requires the display to be redrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    Changed,
    Unchanged,
}

impl Render {
    pub fn is_changed(self) -> bool {
        matches!(self, Render::Changed)
    }
}

/// The calculator engine
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Create a calculator in its initial state (`"0"`, nothing pending)
    pub fn new() -> Self {
        Calculator {
            state: CalculatorState::new(),
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Text for the display
    pub fn display(&self) -> &str {
        self.state.current.as_str()
    }

    /// Left operand and operator waiting for the right operand
    pub fn pending(&self) -> Option<(&str, Operator)> {
        match (&self.state.previous, self.state.operation) {
            (Some(previous), Some(op)) => Some((previous.as_str(), op)),
            _ => None,
        }
    }

    /// Apply one input
    pub fn apply(&mut self, input: Input) -> Render {
        let render = match input {
            Input::Digit(d) => self.append_digit(char::from(b'0' + d.min(9))),
            Input::Decimal => self.append_digit('.'),
            Input::Operate(op) => self.choose_operation(op),
            Input::Equals => self.compute(),
            Input::Clear => self.clear_all(),
            Input::Delete => self.delete_last(),
            Input::Negate => self.toggle_negate(),
            Input::Percent => self.apply_percent(),
        };
        debug!(?input, display = self.display(), ?render, "input handled");
        render
    }

    /// Append a digit or the decimal point to the current entry.
    ///
    /// Directly after a result a new number is started instead. Leading zeros
    /// are replaced and a second decimal point is ignored.
    pub fn append_digit(&mut self, d: char) -> Render {
        if !(d.is_ascii_digit() || d == '.') {
            return Render::Unchanged;
        }

        // A result or the error entry is replaced by a fresh number
        if self.state.just_evaluated || self.state.current.is_error() {
            self.state.current = Entry::Number(if d == '.' {
                "0.".to_string()
            } else {
                d.to_string()
            });
            self.state.just_evaluated = false;
            return Render::Changed;
        }

        let Entry::Number(current) = &mut self.state.current else {
            return Render::Unchanged;
        };

        if d != '.' && current.as_str() == "0" {
            *current = d.to_string();
        } else if d == '.' && current.contains('.') {
            return Render::Unchanged;
        } else {
            current.push(d);
        }
        Render::Changed
    }

    /// Remove the last typed character.
    ///
    /// Directly after a result (or on the error entry) this clears everything instead.
    pub fn delete_last(&mut self) -> Render {
        if self.state.just_evaluated || self.state.current.is_error() {
            return self.clear_all();
        }

        let Entry::Number(current) = &mut self.state.current else {
            return Render::Unchanged;
        };
        if current.len() <= 1 || current.as_str() == "-0" {
            *current = "0".to_string();
        } else {
            current.pop();
            if current.as_str() == "-" {
                *current = "0".to_string();
            }
        }
        Render::Changed
    }

    /// Add or remove a leading minus sign. Zero and the error entry have no sign.
    pub fn toggle_negate(&mut self) -> Render {
        let Entry::Number(current) = &mut self.state.current else {
            return Render::Unchanged;
        };
        if current.as_str() == "0" {
            return Render::Unchanged;
        }

        if let Some(rest) = current.strip_prefix('-') {
            *current = rest.to_string();
        } else {
            current.insert(0, '-');
        }
        Render::Changed
    }

    /// Divide the current entry by 100
    pub fn apply_percent(&mut self) -> Render {
        let Some(value) = self.state.current.as_number().and_then(parse_operand) else {
            return Render::Unchanged;
        };

        self.state.current = Entry::Number(format_number(value / 100.0));
        Render::Changed
    }

    /// Select the pending operator.
    ///
    /// A second operator folds the already pending operation first, so
    /// `3 + 4 +` leaves `7` waiting for another `+`. The display is not
    /// redrawn here unless that fold produced a result.
    pub fn choose_operation(&mut self, op: Operator) -> Render {
        let mut render = Render::Unchanged;
        if self.state.operation.is_some() && !self.state.just_evaluated {
            render = self.compute();
        }

        let Some(current) = self.state.current.as_number() else {
            trace!(%op, "operator ignored after error");
            return render;
        };

        self.state.previous = Some(current.to_string());
        self.state.operation = Some(op);
        self.state.current = Entry::zero();
        self.state.just_evaluated = false;
        render
    }

    /// Evaluate the pending operation.
    ///
    /// Does nothing when no operation is pending or an operand does not
    /// parse. Division by zero yields the error entry.
    pub fn compute(&mut self) -> Render {
        let (Some(op), Some(previous)) = (self.state.operation, self.state.previous.as_deref())
        else {
            return Render::Unchanged;
        };
        let (Some(lhs), Some(rhs)) = (
            parse_operand(previous),
            self.state.current.as_number().and_then(parse_operand),
        ) else {
            return Render::Unchanged;
        };

        self.state.current = match op.apply(lhs, rhs) {
            Some(result) => Entry::Number(format_number(round_result(result))),
            None => {
                debug!(lhs, "division by zero");
                Entry::DivisionByZero
            }
        };
        self.state.previous = None;
        self.state.operation = None;
        self.state.just_evaluated = true;
        Render::Changed
    }

    /// Reset to `"0"` with nothing pending
    pub fn clear_all(&mut self) -> Render {
        self.state = CalculatorState::new();
        Render::Changed
    }
}

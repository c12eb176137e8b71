//! One calculator bound to one display
//!
//! A [`Session`] routes inputs to its [`Calculator`] strictly in the order
//! they arrive and pushes the new display text to its sink whenever an
//! operation re-renders.

use crate::display::DisplaySink;
use crate::engine::{Calculator, Render};
use crate::input::Input;
use tracing::trace;

pub struct Session<D: DisplaySink> {
    calculator: Calculator,
    sink: D,
}

impl<D: DisplaySink> Session<D> {
    /// Start a session; the initial `"0"` is rendered immediately
    pub fn new(sink: D) -> Self {
        let mut session = Session {
            calculator: Calculator::new(),
            sink,
        };
        session.render(Render::Changed);
        session
    }

    /// Apply one input and refresh the display if needed
    pub fn handle(&mut self, input: Input) -> Render {
        let render = self.calculator.apply(input);
        self.render(render);
        render
    }

    /// Feed typed characters in order. Characters without a key mapping are skipped.
    ///
    /// Returns the number of characters that were calculator input.
    pub fn feed_keys(&mut self, keys: &str) -> usize {
        let mut handled = 0;
        for c in keys.chars() {
            match Input::from_char(c) {
                Some(input) => {
                    self.handle(input);
                    handled += 1;
                }
                None => trace!(key = %c.escape_debug(), "ignored key"),
            }
        }
        handled
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn into_sink(self) -> D {
        self.sink
    }

    fn render(&mut self, render: Render) {
        if render.is_changed() {
            self.sink.show(self.calculator.display());
        }
    }
}

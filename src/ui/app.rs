//! Main TUI application state and logic

use crate::display::DisplaySink;
use crate::engine::state::ERROR_TEXT;
use crate::input::Input;
use crate::session::Session;
use crate::ui::keypad::Keypad;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How long a pressed button stays highlighted
const PRESS_FLASH: Duration = Duration::from_millis(150);

/// Width of the calculator column
const CALCULATOR_WIDTH: u16 = 36;

/// Display sink backing the display pane
#[derive(Debug, Clone, Default)]
pub struct ScreenDisplay {
    pub text: String,
}

impl DisplaySink for ScreenDisplay {
    fn show(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

/// The main application state
pub struct App {
    /// Calculator wired to the on-screen display
    pub session: Session<ScreenDisplay>,

    pub keypad: Keypad,

    /// Area the keypad was last drawn into, for mouse hit testing
    pub keypad_area: Rect,

    /// Button to highlight, with the time it was pressed
    pub pressed: Option<(Input, Instant)>,

    /// Whether clicks on the keypad are accepted
    pub mouse_enabled: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(mouse_enabled: bool) -> Self {
        App {
            session: Session::new(ScreenDisplay::default()),
            keypad: Keypad::standard(),
            keypad_area: Rect::default(),
            pressed: None,
            mouse_enabled,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Text currently on the display
    pub fn display_text(&self) -> &str {
        &self.session.sink().text
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(mouse = self.mouse_enabled, "starting event loop");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self
                .pressed
                .is_some_and(|(_, at)| at.elapsed() >= PRESS_FLASH)
            {
                self.pressed = None;
            }

            // Poll with a timeout so the press highlight can fade
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) if self.mouse_enabled => {
                        self.handle_mouse_event(mouse);
                    }
                    _ => {}
                }
            }
        }

        info!(display = self.display_text(), "leaving event loop");
        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Centre a fixed-width column; status bar spans the full width
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let column = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(CALCULATOR_WIDTH),
                Constraint::Fill(1),
            ])
            .split(main_chunks[0])[1];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(column);

        self.keypad_area = rows[1];

        super::panes::render_display_pane(
            frame,
            rows[0],
            &self.session.sink().text,
            self.session.calculator().pending(),
        );

        super::panes::render_keypad_pane(
            frame,
            rows[1],
            &self.keypad,
            self.pressed.map(|(input, _)| input),
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.display_text() == ERROR_TEXT,
            self.mouse_enabled,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => match Input::from_key(key) {
                Some(input) => self.press(input),
                None => debug!(code = ?key.code, "unmapped key"),
            },
        }
    }

    /// Handle mouse events; only left clicks on a button count
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let Some(button) = self
            .keypad
            .button_at(self.keypad_area, mouse.column, mouse.row)
            .copied()
        else {
            return;
        };

        match button.input() {
            Ok(input) => self.press(input),
            Err(e) => {
                warn!(action = button.action, value = ?button.value, "bad button: {}", e);
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Route one input to the calculator
    fn press(&mut self, input: Input) {
        self.session.handle(input);
        self.pressed = Some((input, Instant::now()));
        self.status_message = match self.session.calculator().pending() {
            Some((_, op)) => format!("Pending {}", op),
            None if self.session.calculator().state().just_evaluated => "Evaluated".to_string(),
            None => "Ready!".to_string(),
        };
    }
}

// calctty: four-function terminal calculator

use std::io;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use calctty::config::{Config, init_logging};
use calctty::display::RecordingDisplay;
use calctty::errors::AppError;
use calctty::session::Session;
use calctty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_logging(config.log_file.as_deref())?;

    if config.interactive() {
        run_tui(&config)?;
    } else if let Some(keys) = &config.keys {
        run_headless(keys, config.trace);
    }

    Ok(())
}

/// Feed `keys` to a fresh calculator and print what the display shows
fn run_headless(keys: &str, trace: bool) {
    let mut session = Session::new(RecordingDisplay::new());
    let handled = session.feed_keys(keys);
    info!(handled, "headless run complete");

    let display = session.into_sink();
    if trace {
        for frame in &display.frames {
            println!("{}", frame);
        }
    } else {
        println!("{}", display.current());
    }
}

fn run_tui(config: &Config) -> Result<(), AppError> {
    let mouse_enabled = !config.no_mouse;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(mouse_enabled);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(AppError::from)
}

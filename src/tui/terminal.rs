//! Terminal setup and teardown
//!
//! Initializes raw mode and the alternate screen, installs a panic hook that
//! restores the terminal, and drives the main event loop.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::storage::Storage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits
pub fn run_tui(storage: &Storage, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    info!("event=tui_start db={}", storage.database_path().display());

    let result = event_loop(&mut terminal, storage, settings);

    restore_terminal()?;
    info!("event=tui_stop status={}", if result.is_ok() { "ok" } else { "error" });
    result
}

fn event_loop(terminal: &mut Tui, storage: &Storage, settings: &Settings) -> Result<()> {
    let mut app = App::new(storage, settings);
    app.reload();

    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;
        handle_event(&mut app, events.next()?);
    }

    Ok(())
}

//! TUI entry point and terminal setup.

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};
use tracing::info;

use crate::{store::TaskListStore, tui::app::App};

/// Initialise and run the terminal user interface.
///
/// The terminal is restored even when the event loop fails. Returns the store
/// as the user left it.
pub fn run_tui(store: TaskListStore) -> io::Result<TaskListStore> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("tui started");
    let mut app = App::new(store);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    let store = app.into_store();
    info!(
        total = store.total_count(),
        completed = store.completed_count(),
        "tui closed"
    );
    Ok(store)
}

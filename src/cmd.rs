//! Command handlers for the CLI.

use std::io;

use clap::Subcommand;
use clap_complete::{generate, Shell};
use tracing::info;

use crate::fields::{CategoryFilter, DisplayMode};
use crate::store::TaskListStore;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive task list (default).
    Ui {
        /// Print the final list and progress as JSON after quitting.
        #[arg(long)]
        print_summary: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Build the initial store from startup options.
pub fn initial_store(dark: bool, filter: CategoryFilter) -> TaskListStore {
    let mut store = TaskListStore::new();
    if dark {
        store.set_display_mode(DisplayMode::Dark);
    }
    store.set_filter_category(filter);
    store
}

/// Run the TUI, optionally printing a JSON summary once it closes.
pub fn cmd_ui(store: TaskListStore, print_summary: bool) -> io::Result<()> {
    let store = run_tui(store)?;
    if print_summary {
        let json = serde_json::to_string_pretty(&store.snapshot()).map_err(io::Error::other)?;
        println!("{json}");
    }
    info!("session ended");
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}

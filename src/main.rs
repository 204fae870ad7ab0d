//! # todo - categorised terminal task list
//!
//! A small, single-user to-do list driven from an interactive terminal form.
//!
//! ## Key Features
//!
//! - **Categories**: every task is tagged General, Work, Personal or Urgent
//! - **Add / Edit / Complete / Delete**: one form handles both adding and updating
//! - **Filtering**: narrow the list to one category without touching the data
//! - **Progress**: completed/total counter with a percentage gauge
//! - **Light and dark mode**: purely cosmetic, toggled at any time
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the task list
//! todo
//!
//! # Start dark, showing only urgent tasks, and print a JSON summary on exit
//! todo ui --dark --filter urgent --print-summary
//!
//! # Shell completions
//! todo completions zsh
//! ```
//!
//! Tasks live in memory for the session only. Logs go to `todo.log` in the
//! system temp directory (or `--log-file`), never to the terminal.

use std::io;
use std::path::Path;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

pub mod cli;
pub mod cmd;
pub mod fields;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::*;

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Completions { shell }) => {
            cmd_completions(*shell);
            Ok(())
        }
        Some(Commands::Ui { print_summary }) => {
            let _log_guard = start_logging(&cli);
            cmd_ui(initial_store(cli.dark, cli.filter), *print_summary)
        }
        None => {
            let _log_guard = start_logging(&cli);
            cmd_ui(initial_store(cli.dark, cli.filter), false)
        }
    }
}

/// Open the log file appender, creating its directory if needed.
fn open_log_appender(file_path: Option<&Path>) -> io::Result<RollingFileAppender> {
    let default_path = std::env::temp_dir().join("todo.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid log file path: {}", log_path.display()),
            )
        })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)
        .map_err(io::Error::other)
}

/// Initialise file-based logging.
///
/// The terminal belongs to ratatui while the UI runs, so logs go to a file.
/// The returned guard flushes buffered entries when dropped.
fn init_logging(level: &str, file_path: Option<&Path>) -> io::Result<WorkerGuard> {
    let file_appender = open_log_appender(file_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Start logging, or warn on stderr and carry on without it.
fn start_logging(cli: &Cli) -> Option<WorkerGuard> {
    match init_logging(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    }
}

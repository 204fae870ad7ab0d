use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::fields::CategoryFilter;

/// Categorised in-memory task list with a terminal form.
/// Tasks live only for the session; nothing is written to disk.
#[derive(Parser)]
#[command(name = "todo", version, about = "Categorised terminal todo list")]
pub struct Cli {
    /// Start in dark mode.
    #[arg(long, global = true)]
    pub dark: bool,

    /// Initial category filter (all, general, work, personal, urgent).
    #[arg(long, global = true, default_value = "all")]
    pub filter: CategoryFilter,

    /// Log filter directive, overridden by RUST_LOG.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Log file path (defaults to todo.log in the system temp directory).
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Category;

    #[test]
    fn defaults_to_ui_with_all_filter() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert!(!cli.dark);
        assert_eq!(cli.filter, CategoryFilter::All);
        assert_eq!(cli.log_level, "info");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_flags_and_subcommand() {
        let cli = Cli::try_parse_from(["todo", "ui", "--dark", "--filter", "urgent", "--print-summary"])
            .unwrap();
        assert!(cli.dark);
        assert_eq!(cli.filter, CategoryFilter::Only(Category::Urgent));
        assert!(matches!(cli.command, Some(Commands::Ui { print_summary: true })));
    }

    #[test]
    fn rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["todo", "--filter", "shopping"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

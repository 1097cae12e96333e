//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-08-27)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Quotekeeper - file-backed quote manager
#[derive(Parser, Debug)]
#[command(name = "quotekeeper")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to data directory
    #[arg(short, long, env = "QUOTEKEEPER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new quote
    Add {
        /// Author of the quote
        #[arg(required = true)]
        author: String,

        /// Text of the quote
        #[arg(required = true)]
        content: String,
    },

    /// Delete a quote by id
    Delete {
        /// Numeric id of the quote
        #[arg(required = true)]
        id: String,
    },

    /// Replace a quote's author and content
    Update {
        /// Numeric id of the quote
        #[arg(required = true)]
        id: String,

        /// New author
        #[arg(required = true)]
        author: String,

        /// New text
        #[arg(required = true)]
        content: String,
    },

    /// List all quotes, newest first
    List {
        /// Output format (table, json, brief)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Rebuild the aggregate export file
    Build,

    /// Start interactive REPL mode
    Repl,
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

impl Cli {
    /// Returns the data directory path, using the default if not specified.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".quotekeeper"))
                .unwrap_or_else(|| PathBuf::from(".quotekeeper"))
        })
    }

    /// Returns the directory holding the record files.
    pub fn quotes_dir(&self) -> PathBuf {
        self.data_dir().join("quotes")
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should work (enters REPL mode)
        let cli = Cli::parse_from(["quotekeeper"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_add() {
        let cli = Cli::parse_from(["quotekeeper", "add", "Seneca", "Begin at once to live."]);
        match cli.command {
            Some(Commands::Add { author, content }) => {
                assert_eq!(author, "Seneca");
                assert_eq!(content, "Begin at once to live.");
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parse_delete_keeps_raw_id() {
        // Target ids stay strings so invalid input maps to the
        // invalid-number error instead of a clap parse failure.
        let cli = Cli::parse_from(["quotekeeper", "delete", "abc"]);
        match cli.command {
            Some(Commands::Delete { id }) => assert_eq!(id, "abc"),
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_cli_parse_list_format() {
        let cli = Cli::parse_from(["quotekeeper", "list", "--format", "json"]);
        match cli.command {
            Some(Commands::List { format }) => assert!(matches!(format, OutputFormat::Json)),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["quotekeeper", "-vvv"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_cli_quotes_dir_under_data_dir() {
        let cli = Cli::parse_from(["quotekeeper", "--data-dir", "/tmp/qk"]);
        assert_eq!(cli.quotes_dir(), PathBuf::from("/tmp/qk/quotes"));
    }

    #[test]
    fn test_cli_help() {
        // Verify help can be generated without panic
        Cli::command().debug_assert();
    }
}

//! Error types for the command dispatcher.

use quotekeeper_store::StoreError;
use thiserror::Error;

/// Errors surfaced to the user by the CLI and REPL.
///
/// Invalid-command and invalid-number are raised here before any storage
/// access; not-found and storage failures arrive via [`StoreError`].
#[derive(Error, Debug)]
pub enum CliError {
    /// Unrecognized command token.
    #[error("unknown command: {0}")]
    InvalidCommand(String),

    /// Target id missing, blank, or non-numeric.
    #[error("expected a numeric id, got '{0}'")]
    InvalidNumber(String),

    /// Store failure (includes not-found).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Line editor failure.
    #[error("input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

//! Quotekeeper CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use quotekeeper_cli::cli::{Cli, Commands};
use quotekeeper_cli::commands;
use quotekeeper_cli::repl::Repl;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let data_dir = cli.data_dir();
    let quotes_dir = cli.quotes_dir();

    // Handle command or enter REPL
    let result = match cli.command {
        Some(Commands::Repl) | None => run_repl(&data_dir),
        Some(cmd) => commands::execute(cmd, &quotes_dir).map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_repl(data_dir: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut repl = Repl::new(data_dir)?;
    repl.run()?;
    Ok(())
}

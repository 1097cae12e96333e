//! Command handlers for CLI subcommands.

use std::path::Path;

use quotekeeper_models::Quote;
use quotekeeper_store::{QuoteStore, StoreError};
use tracing::info;

use crate::cli::{Commands, OutputFormat};
use crate::error::Result;
use crate::parse_target_id;

/// Execute a one-shot CLI command against the quotes directory.
pub fn execute(command: Commands, quotes_dir: &Path) -> Result<()> {
    let store = QuoteStore::open(quotes_dir);

    match command {
        Commands::Add { author, content } => cmd_add(&store, &author, &content),
        Commands::Delete { id } => cmd_delete(&store, &id),
        Commands::Update { id, author, content } => cmd_update(&store, &id, &author, &content),
        Commands::List { format } => cmd_list(&store, format),
        Commands::Build => cmd_build(&store),
        Commands::Repl => {
            // REPL is handled separately in main
            Ok(())
        }
    }
}

fn cmd_add(store: &QuoteStore, author: &str, content: &str) -> Result<()> {
    // The id must come from the allocator immediately before the insert.
    let quote = Quote::new(store.next_id()?, author, content);
    store.insert(&quote)?;

    info!(quote_id = %quote.id, "Registered quote");
    println!("Quote {} registered.", quote.id);
    Ok(())
}

fn cmd_delete(store: &QuoteStore, id: &str) -> Result<()> {
    let id = parse_target_id(id)?;

    // Fetch first so a missing id surfaces as not-found rather than
    // silently succeeding through the idempotent storage delete.
    let quote = store.select_by_id(id)?;
    store.delete(quote.id)?;

    info!(quote_id = %id, "Deleted quote");
    println!("Quote {} deleted.", id);
    Ok(())
}

fn cmd_update(store: &QuoteStore, id: &str, author: &str, content: &str) -> Result<()> {
    let id = parse_target_id(id)?;

    let mut quote = store.select_by_id(id)?;
    store.update(&mut quote, author, content)?;

    info!(quote_id = %id, "Updated quote");
    println!("Quote {} updated.", id);
    Ok(())
}

fn cmd_list(store: &QuoteStore, format: OutputFormat) -> Result<()> {
    let mut quotes = store.select_all()?;
    // Display policy: newest first.
    quotes.reverse();

    match format {
        OutputFormat::Table => {
            if quotes.is_empty() {
                println!("No quotes.");
                return Ok(());
            }
            for quote in &quotes {
                println!("{}", quote.info());
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&quotes).map_err(StoreError::from)?;
            println!("{}", json);
        }
        OutputFormat::Brief => {
            for quote in &quotes {
                println!("{}: {}", quote.id, quote.author);
            }
        }
    }
    Ok(())
}

fn cmd_build(store: &QuoteStore) -> Result<()> {
    let count = store.select_all()?.len();
    let path = store.build_export()?;

    info!(count, path = %path.display(), "Built export");
    println!("Export written to {} ({} quotes).", path.display(), count);
    Ok(())
}

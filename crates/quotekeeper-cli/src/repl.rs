//! Interactive REPL (Read-Eval-Print Loop) for Quotekeeper.

use std::path::{Path, PathBuf};

use quotekeeper_models::Quote;
use quotekeeper_store::QuoteStore;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper, Result as RlResult};
use tracing::debug;

use crate::error::{CliError, Result};
use crate::parse_target_id;

/// Help information for a command.
pub struct CommandHelp {
    /// Command name (e.g., "add").
    pub name: &'static str,
    /// Command aliases (e.g., ["a"]).
    pub aliases: &'static [&'static str],
    /// Brief one-line description.
    pub brief: &'static str,
    /// Usage syntax.
    pub usage: &'static str,
    /// Examples with descriptions.
    pub examples: &'static [(&'static str, &'static str)],
}

/// Static help entries for all commands.
static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "add",
        aliases: &["a"],
        brief: "Register a new quote",
        usage: "add",
        examples: &[("add", "Prompts for the quote text and its author")],
    },
    CommandHelp {
        name: "delete",
        aliases: &["del", "d"],
        brief: "Delete a quote by id",
        usage: "delete [id]",
        examples: &[
            ("delete 3", "Delete quote 3"),
            ("delete", "Prompts for the id"),
        ],
    },
    CommandHelp {
        name: "update",
        aliases: &["u"],
        brief: "Replace a quote's author and content",
        usage: "update [id]",
        examples: &[
            ("update 3", "Update quote 3, prompting for the new text"),
            ("update", "Prompts for the id first"),
        ],
    },
    CommandHelp {
        name: "list",
        aliases: &["ls", "l"],
        brief: "List all quotes, newest first",
        usage: "list",
        examples: &[("list", "Show every stored quote")],
    },
    CommandHelp {
        name: "build",
        aliases: &["b"],
        brief: "Rebuild the aggregate export file",
        usage: "build",
        examples: &[("build", "Write every quote to data.json")],
    },
    CommandHelp {
        name: "help",
        aliases: &["h", "?"],
        brief: "Show help",
        usage: "help [command]",
        examples: &[
            ("help", "Show all commands"),
            ("help delete", "Show detailed help for delete"),
        ],
    },
    CommandHelp {
        name: "quit",
        aliases: &["q", "exit"],
        brief: "Exit the REPL",
        usage: "quit",
        examples: &[("quit", "Exit; history is saved automatically")],
    },
];

/// Tab completion for REPL commands.
struct CommandCompleter;

impl CommandCompleter {
    const COMMANDS: &'static [&'static str] =
        &["add", "build", "delete", "help", "list", "quit", "update"];
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> RlResult<(usize, Vec<Pair>)> {
        // Only complete the command token itself.
        if line[..pos].contains(' ') {
            return Ok((0, vec![]));
        }

        let prefix = &line[..pos];
        let matches: Vec<Pair> = Self::COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// Commands available in the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Register a new quote (fields are prompted for)
    Add,
    /// Delete a quote, id inline or prompted
    Delete(Option<String>),
    /// Update a quote, id inline or prompted
    Update(Option<String>),
    /// List all quotes
    List,
    /// Rebuild the aggregate export
    Build,
    /// Show help (optionally for a specific command)
    Help(Option<String>),
    /// Quit the REPL
    Quit,
    /// Unknown command token
    Unknown(String),
    /// Blank input
    Empty,
}

impl ReplCommand {
    /// Parses input into a REPL command.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        if input.is_empty() {
            return ReplCommand::Empty;
        }

        let parts: Vec<&str> = input.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim().to_string());

        match cmd.as_str() {
            "add" | "a" => ReplCommand::Add,
            "delete" | "del" | "d" => ReplCommand::Delete(arg),
            "update" | "u" => ReplCommand::Update(arg),
            "list" | "ls" | "l" => ReplCommand::List,
            "build" | "b" => ReplCommand::Build,
            "help" | "h" | "?" => ReplCommand::Help(arg),
            "quit" | "q" | "exit" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(cmd),
        }
    }
}

/// REPL state.
pub struct Repl {
    editor: Editor<CommandCompleter, DefaultHistory>,
    store: QuoteStore,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Creates a new REPL over the given data directory.
    pub fn new(data_dir: &Path) -> RlResult<Self> {
        let config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(CommandCompleter));

        let store = QuoteStore::open(data_dir.join("quotes"));

        let history_path = data_dir.join("repl_history.txt");
        if history_path.exists() {
            let _ = editor.load_history(&history_path);
        }

        Ok(Self {
            editor,
            store,
            history_path: Some(history_path),
        })
    }

    /// Runs the REPL loop.
    pub fn run(&mut self) -> RlResult<()> {
        println!("Quotekeeper v{}", env!("CARGO_PKG_VERSION"));
        println!("Type help for commands, quit to exit");
        println!();

        loop {
            match self.editor.readline("quotekeeper> ") {
                Ok(line) => {
                    self.editor.add_history_entry(&line)?;

                    let cmd = ReplCommand::parse(&line);
                    debug!(?cmd, "Parsed command");

                    match self.handle_command(cmd) {
                        Ok(true) => break, // Quit requested
                        Ok(false) => {}    // Continue
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Don't exit on Ctrl+C, just clear line
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(path) = &self.history_path {
            let _ = self.editor.save_history(path);
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Handles a REPL command. Returns Ok(true) if the loop should quit.
    fn handle_command(&mut self, cmd: ReplCommand) -> Result<bool> {
        match cmd {
            ReplCommand::Add => {
                let content = self.prompt("Quote: ")?;
                let author = self.prompt("Author: ")?;

                let quote = Quote::new(self.store.next_id()?, author, content);
                self.store.insert(&quote)?;

                println!("Quote {} registered.", quote.id);
                Ok(false)
            }

            ReplCommand::Delete(arg) => {
                let raw = match arg {
                    Some(arg) => arg,
                    None => self.prompt("Id: ")?,
                };
                let id = parse_target_id(&raw)?;

                let quote = self.store.select_by_id(id)?;
                self.store.delete(quote.id)?;

                println!("Quote {} deleted.", id);
                Ok(false)
            }

            ReplCommand::Update(arg) => {
                let raw = match arg {
                    Some(arg) => arg,
                    None => self.prompt("Id: ")?,
                };
                let id = parse_target_id(&raw)?;

                let mut quote = self.store.select_by_id(id)?;
                println!("Current: {}", quote.info());

                let content = self.prompt("New quote: ")?;
                let author = self.prompt("New author: ")?;
                self.store.update(&mut quote, author, content)?;

                println!("Quote {} updated.", id);
                Ok(false)
            }

            ReplCommand::List => {
                let mut quotes = self.store.select_all()?;
                if quotes.is_empty() {
                    println!("No quotes.");
                } else {
                    // Display policy: newest first.
                    quotes.reverse();
                    for quote in &quotes {
                        println!("{}", quote.info());
                    }
                }
                Ok(false)
            }

            ReplCommand::Build => {
                let path = self.store.build_export()?;
                println!("Export written to {}.", path.display());
                Ok(false)
            }

            ReplCommand::Help(topic) => {
                match topic {
                    Some(topic) => self.show_command_help(&topic),
                    None => self.show_help(),
                }
                Ok(false)
            }

            ReplCommand::Quit => Ok(true),

            ReplCommand::Unknown(cmd) => Err(CliError::InvalidCommand(cmd)),

            ReplCommand::Empty => Ok(false),
        }
    }

    /// Reads one free-text field from the user.
    fn prompt(&mut self, label: &str) -> Result<String> {
        let line = self.editor.readline(label)?;
        Ok(line.trim().to_string())
    }

    /// Shows the brief help table for all commands.
    fn show_help(&self) {
        println!("Commands:");
        for help in COMMAND_HELP {
            let aliases = if help.aliases.is_empty() {
                String::new()
            } else {
                format!(" ({})", help.aliases.join(", "))
            };
            println!("  {:<18} {}{}", help.usage, help.brief, aliases);
        }
        println!("\nUse 'help <command>' for details.");
    }

    /// Shows detailed help for a single command.
    fn show_command_help(&self, topic: &str) {
        let topic = topic.to_lowercase();
        let entry = COMMAND_HELP
            .iter()
            .find(|h| h.name == topic || h.aliases.contains(&topic.as_str()));

        match entry {
            Some(help) => {
                println!("{} - {}", help.name, help.brief);
                println!("Usage: {}", help.usage);
                if !help.examples.is_empty() {
                    println!("Examples:");
                    for (example, description) in help.examples {
                        println!("  {:<14} {}", example, description);
                    }
                }
            }
            None => println!("No help for '{}'. Try 'help'.", topic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(ReplCommand::parse("add"), ReplCommand::Add);
        assert_eq!(ReplCommand::parse("a"), ReplCommand::Add);
    }

    #[test]
    fn test_parse_delete_with_id() {
        assert_eq!(
            ReplCommand::parse("delete 3"),
            ReplCommand::Delete(Some("3".to_string()))
        );
    }

    #[test]
    fn test_parse_delete_without_id() {
        assert_eq!(ReplCommand::parse("delete"), ReplCommand::Delete(None));
        assert_eq!(ReplCommand::parse("d"), ReplCommand::Delete(None));
    }

    #[test]
    fn test_parse_update_alias() {
        assert_eq!(
            ReplCommand::parse("u 7"),
            ReplCommand::Update(Some("7".to_string()))
        );
    }

    #[test]
    fn test_parse_list_aliases() {
        assert_eq!(ReplCommand::parse("list"), ReplCommand::List);
        assert_eq!(ReplCommand::parse("ls"), ReplCommand::List);
        assert_eq!(ReplCommand::parse("l"), ReplCommand::List);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ReplCommand::parse("LIST"), ReplCommand::List);
        assert_eq!(ReplCommand::parse("Build"), ReplCommand::Build);
    }

    #[test]
    fn test_parse_help_topic() {
        assert_eq!(
            ReplCommand::parse("help delete"),
            ReplCommand::Help(Some("delete".to_string()))
        );
        assert_eq!(ReplCommand::parse("?"), ReplCommand::Help(None));
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(ReplCommand::parse("quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("exit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("q"), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            ReplCommand::parse("frobnicate"),
            ReplCommand::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(ReplCommand::parse(""), ReplCommand::Empty);
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
    }

    #[test]
    fn test_help_table_covers_all_commands() {
        for cmd in CommandCompleter::COMMANDS {
            assert!(
                COMMAND_HELP.iter().any(|h| h.name == *cmd),
                "missing help entry for {}",
                cmd
            );
        }
    }
}

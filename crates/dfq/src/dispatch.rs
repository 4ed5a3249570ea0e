//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands are split by whether they need the records file, so that
//! `parse`, `operators`, `config` and `completions` work without one.

use datefilter_rs::RecordStore;

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without the records file.
pub trait StandaloneCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that read the records file.
pub trait RecordsCommand {
    /// Execute the command against the given store.
    fn execute(&self, ctx: &CommandContext, store: &RecordStore) -> Result<()>;
}

/// Commands that don't need the records file.
pub enum StandaloneDispatch<'a> {
    Parse(&'a str),
    Operators,
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> StandaloneDispatch<'a> {
    /// Try to create a standalone dispatch from the CLI command.
    /// Returns None if the command needs the records file.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Parse { filter }) => Some(Self::Parse(filter)),
            Some(Commands::Operators) => Some(Self::Operators),
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            Some(Commands::Filter { .. }) => None,
        }
    }
}

impl StandaloneCommand for StandaloneDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Parse(filter) => commands::parse::execute(ctx, filter),
            Self::Operators => commands::operators::execute(ctx),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("dfq - filter records by date parameters");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that read the records file.
pub enum RecordsDispatch<'a> {
    Filter {
        filter: &'a str,
        start: &'a Option<String>,
        end: &'a Option<String>,
        limit: Option<usize>,
    },
}

impl<'a> RecordsDispatch<'a> {
    /// Create a records dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Filter {
                filter,
                start,
                end,
                limit,
            }) => Some(Self::Filter {
                filter,
                start,
                end,
                limit: *limit,
            }),
            _ => None,
        }
    }
}

impl RecordsCommand for RecordsDispatch<'_> {
    fn execute(&self, ctx: &CommandContext, store: &RecordStore) -> Result<()> {
        match self {
            Self::Filter {
                filter,
                start,
                end,
                limit,
            } => {
                let opts = commands::filter::FilterOptions {
                    filter: filter.to_string(),
                    start: (*start).clone(),
                    end: (*end).clone(),
                    limit: *limit,
                };
                commands::filter::execute(ctx, store, &opts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_standalone_commands() {
        for args in [
            vec!["dfq"],
            vec!["dfq", "parse", "eq2013-01-14"],
            vec!["dfq", "operators"],
            vec!["dfq", "config", "path"],
            vec!["dfq", "completions", "bash"],
        ] {
            let cli = Cli::parse_from(&args);
            assert!(
                StandaloneDispatch::try_from_cli(&cli).is_some(),
                "{args:?} should not need records"
            );
            assert!(RecordsDispatch::from_cli(&cli).is_none());
        }
    }

    #[test]
    fn test_filter_needs_records() {
        let cli = Cli::parse_from(["dfq", "filter", "gt2013-01-14T10:00", "--end", "2013-01-15"]);
        assert!(StandaloneDispatch::try_from_cli(&cli).is_none());

        match RecordsDispatch::from_cli(&cli) {
            Some(RecordsDispatch::Filter { filter, end, .. }) => {
                assert_eq!(filter, "gt2013-01-14T10:00");
                assert_eq!(end.as_deref(), Some("2013-01-15"));
            }
            None => panic!("Expected Filter dispatch"),
        }
    }
}

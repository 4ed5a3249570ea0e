//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the dfq CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// dfq - Filter time-stamped records with date search parameters
#[derive(Parser, Debug)]
#[command(name = "dfq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Records file (default: from config, then the XDG data directory)
    #[arg(long, global = true, env = "DFQ_RECORDS")]
    pub records: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a filter parameter and show how it resolves
    #[command(alias = "p")]
    Parse {
        /// Filter parameter (e.g., "ge2013-03-14" or "lt2013-01-14T10:00")
        #[arg(allow_hyphen_values = true)]
        filter: String,
    },

    /// List records matching a filter parameter
    #[command(alias = "f")]
    Filter {
        /// Filter parameter (e.g., "eq2013-01-14")
        #[arg(allow_hyphen_values = true)]
        filter: String,

        /// Period start for `lt` (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long)]
        start: Option<String>,

        /// Period end for `gt` (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long)]
        end: Option<String>,

        /// Show at most this many records
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the supported filter operators
    Operators,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (records.path, output.color, output.date_format)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Show config file path
    Path,
}

/// Shells for completion generation
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

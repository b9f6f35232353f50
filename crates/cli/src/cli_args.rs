//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::{Parser, Subcommand};

/// Command-line arguments for the history-book CLI tool.
///
/// This structure defines all available options and subcommands that can be
/// passed to the `hb` binary.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the saved commands JSON file.
    ///
    /// If not provided, defaults to `project_commands.json` in the current
    /// directory.
    #[arg(long, short = 'c', global = true)]
    pub commands_path: Option<String>,

    #[command(subcommand)]
    pub verb: Verb,
}

#[derive(Subcommand, Debug)]
pub enum Verb {
    /// Interactively add new commands from your shell history.
    #[command(alias = "scrape")]
    Add,

    /// List all saved commands, with optional tag filtering.
    List {
        /// A comma-separated list of tags to filter by (e.g. "build,docker").
        #[arg(long)]
        tags: Option<String>,
    },

    /// Run saved commands by their short names.
    Run {
        /// The short names of the commands to execute, in order.
        #[arg(num_args(1..), required = true)]
        names: Vec<String>,

        /// Suppress history-book's own output (e.g. "Running:" messages)
        /// for this execution. Failures are still reported.
        #[arg(long, short = 'q', action)]
        quiet: bool,
    },

    /// Interactively edit properties of a saved command.
    Edit,
}

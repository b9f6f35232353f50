//! History Book CLI Library
//!
//! This crate provides the command-line interface for history-book, a tool
//! that bookmarks shell commands scraped from history and runs them again
//! by name. It handles argument parsing, interactive prompts, and the
//! `add`/`list`/`run`/`edit` workflows.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`prompter`]: The four interactive prompt primitives and their
//!   dialoguer-backed implementation
//! - [`commands`]: One handler per CLI verb
//! - [`interrupt`]: Ctrl-C flag used to abort a batch of runs
//!
//! # Examples
//!
//! The CLI binary (`hb`) is used like this:
//!
//! ```bash
//! # Pick new commands out of your shell history
//! hb add
//!
//! # List everything saved, or only records tagged build or docker
//! hb list
//! hb list --tags build,docker
//!
//! # Run saved commands by name
//! hb run deploy
//! hb run -q build deploy
//!
//! # Edit a record's name, description, tags and quiet flag
//! hb edit
//! ```

pub mod cli_args;
pub mod commands;
pub mod interrupt;
pub mod prompter;

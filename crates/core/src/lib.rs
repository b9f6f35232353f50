//! History Book Core Library
//!
//! This crate provides the core functionality for history-book, a tool that
//! scrapes shell history into a bookmark file of saved commands and runs
//! them again later by name.
//!
//! # Key Features
//!
//! - **Command Store**: Load, migrate, merge and save the JSON-backed list
//!   of saved command records
//! - **History Reader**: Extract recent distinct commands from zsh, bash or
//!   fish history files
//! - **Execution**: Run saved command text under the user's shell and
//!   classify the outcome
//! - **Error Handling**: Structured error types for all failure modes
//!
//! # Examples
//!
//! Loading saved commands from the store:
//!
//! ```no_run
//! use history_book_core::store::CommandStore;
//!
//! let store = CommandStore::new("project_commands.json");
//! let records = store.load()?;
//! for record in &records {
//!     println!("{record}");
//! }
//! # Ok::<(), history_book_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod history;
pub mod record;
pub mod store;

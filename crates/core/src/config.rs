//! Configuration path utilities for history-book.
//!
//! This module provides functions for resolving the commands file path and
//! the shell used to interpret saved commands.

use std::env;

/// Default path for the saved commands file, relative to the working
/// directory so each project keeps its own command book.
const DEFAULT_COMMANDS_PATH: &str = "project_commands.json";

/// Default shell to use for command execution when `$SHELL` is unset
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Resolves the commands file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// commands path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use history_book_core::config::get_commands_path;
///
/// // Use default path
/// let default_path = get_commands_path(&None);
/// assert_eq!(default_path, "project_commands.json");
///
/// // Use custom path
/// let custom_path = get_commands_path(&Some("/path/to/commands.json".to_string()));
/// ```
pub fn get_commands_path(commands_path_arg: &Option<String>) -> String {
    let commands_path = match commands_path_arg {
        Some(commands_path) => commands_path,
        None => DEFAULT_COMMANDS_PATH,
    };

    shellexpand::tilde(commands_path).to_string()
}

/// Returns the shell that saved commands are interpreted with: `$SHELL` if
/// set, otherwise [`DEFAULT_SHELL`].
#[must_use]
pub fn get_shell() -> String {
    env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string())
}

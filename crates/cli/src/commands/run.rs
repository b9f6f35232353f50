use chrono::Utc;
use crossterm::style::Stylize;
use history_book_core::error::Result;
use history_book_core::execution::{self, Outcome};
use history_book_core::store::{find_by_name, update_timestamp, CommandStore};

use crate::interrupt;

/// Runs one or more saved commands by name, sequentially.
///
/// Each record's effective quiet mode is the OR of `quiet` and its stored
/// flag; start and success notices honor it, failure notices never do.
/// `last_run` is only updated for commands that exit zero, and the store is
/// saved once after the whole batch. An interrupt aborts the remaining
/// batch.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded or saved, or if the shell
/// itself cannot be spawned. An unknown name or a failing command is
/// reported but does not abort the batch.
pub fn run(store: &CommandStore, names: &[String], quiet: bool, shell: &str) -> Result<()> {
    let mut records = store.load()?;
    let mut updated = false;

    for name in names {
        if interrupt::interrupted() {
            println!("Operation cancelled by user.");
            break;
        }

        let Some(record) = find_by_name(&records, name) else {
            eprintln!("No command with the name `{name}` found.");
            continue;
        };
        let id = record.id.clone();
        let command = record.command.clone();
        let effective_quiet = execution::effective_quiet(quiet, record.quiet);

        if !effective_quiet {
            println!("Running `{name}`: {}\n", command.as_str().green().bold());
        }

        match execution::execute_shell(&command, shell)? {
            Outcome::Success => {
                if !effective_quiet {
                    println!("\nCommand `{name}` completed successfully.");
                }
                if update_timestamp(&mut records, &id, Utc::now()) {
                    updated = true;
                }
            }
            Outcome::Failed(code) => {
                // Failures are never silenced, only starts and successes.
                eprintln!("\nError: Command `{name}` failed with exit code {code}.");
            }
            Outcome::Interrupted => {
                println!("\nOperation cancelled by user.");
                break;
            }
        }
    }

    if updated {
        store.save(&records)?;
    }

    Ok(())
}

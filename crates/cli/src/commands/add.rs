use std::collections::HashSet;

use history_book_core::error::Result;
use history_book_core::history::{self, DEFAULT_COMMAND_LIMIT};
use history_book_core::store::{merge_candidates, CommandStore};
use log::warn;

use crate::prompter::Prompter;

/// Scrapes shell history and lets the user pick commands to save.
///
/// Commands already in the store are filtered out before the checklist is
/// shown, and the merge deduplicates again, so selecting an already-saved
/// command can never create a second record for it.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded or saved, or if the
/// checklist prompt fails. An empty history or a cancelled prompt is a
/// friendly message, not an error.
pub fn add(store: &CommandStore, prompter: &dyn Prompter) -> Result<()> {
    let mut records = store.load()?;

    let Some((path, dialect)) = history::detect_source() else {
        println!(
            "Could not find a supported history file (.zsh_history, .bash_history or fish) \
             in your home directory."
        );
        return Ok(());
    };

    let commands = history::read_history(&path, dialect, DEFAULT_COMMAND_LIMIT);
    if commands.is_empty() {
        println!("No commands found or unable to parse history file.");
        return Ok(());
    }

    // Don't offer commands that are already saved.
    let candidates: Vec<String> = {
        let saved: HashSet<&str> = records.iter().map(|r| r.command.as_str()).collect();
        commands
            .into_iter()
            .filter(|c| !saved.contains(c.as_str()))
            .collect()
    };

    if candidates.is_empty() {
        println!(
            "No new commands found in your recent history. All recent commands are already \
             saved in `{}`.",
            store.path().display()
        );
        return Ok(());
    }

    let Some(selected_indices) = prompter.checklist(
        "Select commands to save (space to toggle, enter when done)",
        &candidates,
    )?
    else {
        println!("Operation cancelled.");
        return Ok(());
    };

    let selected = selected_candidates(selected_indices, &candidates);

    let new_records = merge_candidates(&selected, &records);
    if new_records.is_empty() {
        println!("No new commands selected to add.");
        return Ok(());
    }

    let added = new_records.len();
    records.extend(new_records);
    store.save(&records)?;

    println!(
        "Added {added} new command(s) to `{}`.",
        store.path().display()
    );
    Ok(())
}

/// Resolves checklist indices back to candidate strings, in selection
/// order. Out-of-range indices from a misbehaving prompter are dropped
/// with a warning rather than panicking.
fn selected_candidates(indices: Vec<usize>, candidates: &[String]) -> Vec<String> {
    indices
        .into_iter()
        .filter_map(|i| {
            let candidate = candidates.get(i).cloned();
            if candidate.is_none() {
                warn!("Ignoring out-of-range selection index {i}");
            }
            candidate
        })
        .collect()
}

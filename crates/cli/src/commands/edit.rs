use history_book_core::error::Result;
use history_book_core::store::CommandStore;
use itertools::Itertools;

use crate::prompter::Prompter;

/// Interactively edits one saved command's metadata.
///
/// The user picks a record from a menu, then is prompted for name,
/// description, tags and the quiet flag in turn. Cancelling any single
/// prompt keeps that field's current value; edits already accepted in
/// earlier prompts are still saved.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded or saved, or if a prompt
/// fails. Cancelling the record menu is not an error.
pub fn edit(store: &CommandStore, prompter: &dyn Prompter) -> Result<()> {
    let mut records = store.load()?;

    if records.is_empty() {
        println!(
            "No commands found in `{}` to edit.",
            store.path().display()
        );
        return Ok(());
    }

    let items: Vec<String> = records.iter().map(ToString::to_string).collect();
    let Some(index) = prompter.menu("Select a command to edit", &items)? else {
        println!("Command selection cancelled.");
        return Ok(());
    };

    let record = &mut records[index];

    if let Some(name) = prompter.input(
        &format!("Short name for: {}", record.command),
        &record.name,
    )? {
        record.name = name.trim().to_string();
    }

    if let Some(description) = prompter.input(
        &format!("Description for: {}", record.command),
        &record.description,
    )? {
        record.description = description;
    }

    let current_tags = record.tags.iter().join(", ");
    if let Some(tags) = prompter.input(
        &format!("Tags for: {} (comma-separated)", record.command),
        &current_tags,
    )? {
        record.tags = tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
    }

    let quiet_status = if record.quiet { "ON" } else { "OFF" };
    if let Some(quiet) = prompter.confirm(
        &format!("Run `{record}` quietly? (currently {quiet_status})"),
        record.quiet,
    )? {
        record.quiet = quiet;
    }

    store.save(&records)
}

use crossterm::style::Stylize;
use history_book_core::error::Result;
use history_book_core::store::{filter_by_tags, CommandStore};
use itertools::Itertools;

/// Prints all saved commands, optionally filtered by tags.
///
/// `tags_arg` is a comma-separated list; a record is shown when any of its
/// tags matches any requested tag, case-insensitively.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded.
pub fn list(store: &CommandStore, tags_arg: Option<&str>) -> Result<()> {
    let records = store.load()?;

    let requested_tags: Vec<String> = tags_arg
        .map(|tags| {
            tags.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let to_display = filter_by_tags(&records, &requested_tags);

    println!("\n--- Saved Commands ---\n");

    if to_display.is_empty() {
        println!("No commands found matching the specified criteria.");
        return Ok(());
    }

    for record in to_display {
        let name = if record.name.is_empty() {
            "N/A"
        } else {
            record.name.as_str()
        };
        let tags = format!("[{}]", record.tags.iter().join(", "));

        println!("  {} {}", name.yellow().bold(), tags.blue());
        println!("  └─ {}", record.command.as_str().green());

        let quiet_marker = if record.quiet { " (Quiet)" } else { "" };
        if !record.description.is_empty() {
            println!(
                "     {}",
                format!("{}{quiet_marker}", record.description).dim()
            );
        } else if record.quiet {
            println!("     {}", "(Quiet)".dim());
        }

        if let Some(last_run) = record.last_run {
            println!("     {}", format!("last run: {last_run}").dim());
        }

        println!("{}", "-".repeat(20));
    }

    Ok(())
}

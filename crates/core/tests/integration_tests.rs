//! Integration tests for history-book-core
//!
//! These tests verify that the store, migration and execution pieces work
//! together correctly by exercising complete workflows end-to-end.

use std::fs;
use std::io::Write;

use chrono::Utc;
use history_book_core::{
    execution::{execute_shell, Outcome},
    record::CommandRecord,
    store::{merge_candidates, update_timestamp, CommandStore},
};
use tempfile::{NamedTempFile, TempDir};

fn store_in(dir: &TempDir) -> CommandStore {
    CommandStore::new(dir.path().join("project_commands.json"))
}

#[test]
fn test_load_missing_file_returns_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = store.load().unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_load_corrupt_file_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{not valid json").unwrap();

    let store = CommandStore::new(file.path());
    let result = store.load();

    assert!(result.is_err());
    // The diagnostic must identify the file and the underlying cause.
    let message = result.unwrap_err().to_string();
    assert!(message.contains(file.path().to_str().unwrap()));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut record = CommandRecord::new("cargo test".to_string());
    record.name = "test".to_string();
    record.description = "run the tests".to_string();
    record.tags = vec!["rust".to_string(), "ci".to_string()];
    record.last_run = Some("2024-03-04T05:06:07Z".parse().unwrap());
    record.quiet = true;
    let records = vec![record, CommandRecord::new("ls -la".to_string())];

    store.save(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_save_load_save_is_byte_stable() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .save(&[CommandRecord::new("git status".to_string())])
        .unwrap();
    let first_contents = fs::read_to_string(store.path()).unwrap();

    let loaded = store.load().unwrap();
    store.save(&loaded).unwrap();
    let second_contents = fs::read_to_string(store.path()).unwrap();

    assert_eq!(first_contents, second_contents);
}

#[test]
fn test_save_is_pretty_printed() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .save(&[CommandRecord::new("ls".to_string())])
        .unwrap();

    let contents = fs::read_to_string(store.path()).unwrap();
    assert!(contents.contains('\n'));
    assert!(contents.contains("\"command\": \"ls\""));
}

#[test]
fn test_legacy_records_are_migrated_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("project_commands.json");

    // A file written before name/tags/quiet existed.
    fs::write(&path, r#"[{"command": "make deploy", "last_run": null}]"#).unwrap();

    let store = CommandStore::new(&path);
    let records = store.load().unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert!(!record.id.is_empty());
    assert_eq!(record.name, "");
    assert_eq!(record.command, "make deploy");
    assert!(record.tags.is_empty());
    assert!(record.last_run.is_none());
    assert!(!record.quiet);
}

#[test]
fn test_migration_is_idempotent_after_one_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("project_commands.json");

    fs::write(&path, r#"[{"command": "make deploy"}]"#).unwrap();

    let store = CommandStore::new(&path);
    let migrated = store.load().unwrap();
    store.save(&migrated).unwrap();

    let first_contents = fs::read_to_string(&path).unwrap();
    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, migrated);

    store.save(&reloaded).unwrap();
    let second_contents = fs::read_to_string(&path).unwrap();
    assert_eq!(first_contents, second_contents);
}

#[test]
fn test_unknown_fields_survive_a_save_cycle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("project_commands.json");

    fs::write(
        &path,
        r#"[{"command": "ls", "favourite": true, "weight": 3}]"#,
    )
    .unwrap();

    let store = CommandStore::new(&path);
    let records = store.load().unwrap();
    store.save(&records).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("favourite"));
    assert!(contents.contains("weight"));
}

#[test]
fn test_scrape_merge_save_workflow() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    // First scrape session: two selections, one an accidental duplicate.
    let mut records = store.load().unwrap();
    let candidates = vec!["git status".to_string(), "git status".to_string()];
    records.extend(merge_candidates(&candidates, &records));
    store.save(&records).unwrap();

    let after_first = store.load().unwrap();
    assert_eq!(after_first.len(), 1);

    // Second session offers the same command again plus a new one.
    let mut records = store.load().unwrap();
    let candidates = vec!["git status".to_string(), "cargo build".to_string()];
    records.extend(merge_candidates(&candidates, &records));
    store.save(&records).unwrap();

    let after_second = store.load().unwrap();
    let commands: Vec<&str> = after_second.iter().map(|r| r.command.as_str()).collect();
    assert_eq!(commands, vec!["git status", "cargo build"]);
}

#[test]
fn test_timestamp_updates_only_on_success() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut records = vec![
        CommandRecord::new("true".to_string()),
        CommandRecord::new("false".to_string()),
    ];
    let succeeding_id = records[0].id.clone();
    let failing_id = records[1].id.clone();
    store.save(&records).unwrap();

    for (command, id) in [("true", &succeeding_id), ("false", &failing_id)] {
        let outcome = execute_shell(command, "/bin/sh").unwrap();
        if outcome == Outcome::Success {
            update_timestamp(&mut records, id, Utc::now());
        }
    }
    store.save(&records).unwrap();

    let loaded = store.load().unwrap();
    assert!(loaded[0].last_run.is_some());
    assert!(loaded[1].last_run.is_none());
}

#[test]
fn test_save_failure_is_recoverable() {
    let store = CommandStore::new("/this/directory/does/not/exist/commands.json");
    let records = vec![CommandRecord::new("ls".to_string())];

    let result = store.save(&records);
    assert!(result.is_err());
    // In-memory state is untouched; the caller can retry elsewhere.
    assert_eq!(records.len(), 1);
}

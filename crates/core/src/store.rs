//! The JSON-backed command store.
//!
//! [`CommandStore`] is the sole owner of the persisted commands file: all
//! reads and writes go through it. Loading migrates every record to the
//! current schema; saving writes pretty-printed JSON through a temp file so
//! a crash mid-write leaves the previous good file in place.
//!
//! The collection-level operations (merge, lookup, tag filtering, timestamp
//! updates) are free functions over record slices so they can be tested
//! without touching the filesystem.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::error::{Error, Result};
use crate::record::{CommandRecord, RawRecord};

const FILE_DESCRIPTION: &str = "commands";

pub struct CommandStore {
    path: PathBuf,
}

impl CommandStore {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all saved command records, migrated to the current schema.
    ///
    /// A missing file is not an error: it means no commands have been saved
    /// yet, and an empty list is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if its
    /// contents are not a valid JSON array of records. Callers must treat a
    /// parse failure as fatal rather than proceed with partial state.
    pub fn load(&self) -> Result<Vec<CommandRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No commands file at `{}` yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(Error::io_error(
                    FILE_DESCRIPTION.to_string(),
                    self.path.display().to_string(),
                    e,
                ))
            }
        };

        let raw_records: Vec<RawRecord> = serde_json::from_str(&contents).map_err(|e| {
            Error::json_error(
                "reading".to_string(),
                FILE_DESCRIPTION.to_string(),
                self.path.display().to_string(),
                e,
            )
        })?;

        Ok(raw_records.into_iter().map(CommandRecord::from_raw).collect())
    }

    /// Writes the full record sequence back, pretty-printed.
    ///
    /// The file is written to a sibling temp path and renamed over the
    /// original, so the previous good file survives a crash mid-write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write/rename fails. This is
    /// recoverable: in-memory state is untouched, only persistence failed.
    pub fn save(&self, records: &[CommandRecord]) -> Result<()> {
        let serialized = serde_json::to_string_pretty(records).map_err(|e| {
            Error::json_error(
                "writing".to_string(),
                FILE_DESCRIPTION.to_string(),
                self.path.display().to_string(),
                e,
            )
        })?;

        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, serialized).map_err(|e| {
            Error::io_error(
                FILE_DESCRIPTION.to_string(),
                temp_path.display().to_string(),
                e,
            )
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            Error::io_error(
                FILE_DESCRIPTION.to_string(),
                self.path.display().to_string(),
                e,
            )
        })
    }
}

/// Creates fresh records for each candidate command string not already
/// present among the existing records.
///
/// Presence is exact string equality on the `command` text, with no
/// normalization. Duplicates within the incoming batch are also dropped, so
/// merging the same candidate list twice adds each command only once. Order
/// of the returned records follows candidate order.
#[must_use]
pub fn merge_candidates(candidates: &[String], existing: &[CommandRecord]) -> Vec<CommandRecord> {
    let mut seen: HashSet<&str> = existing.iter().map(|r| r.command.as_str()).collect();

    let mut new_records = Vec::new();
    for candidate in candidates {
        if seen.insert(candidate.as_str()) {
            new_records.push(CommandRecord::new(candidate.clone()));
        }
    }

    new_records
}

/// Finds the first record with the given name.
///
/// Names are unique by convention only; when several records share a name,
/// the first match wins.
#[must_use]
pub fn find_by_name<'a>(records: &'a [CommandRecord], name: &str) -> Option<&'a CommandRecord> {
    let found = records.iter().find(|r| r.name == name);
    if let Some(record) = found {
        debug!("Resolved name `{name}` to record id `{}`", record.id);
    }
    found
}

#[must_use]
pub fn find_by_id<'a>(records: &'a [CommandRecord], id: &str) -> Option<&'a CommandRecord> {
    records.iter().find(|r| r.id == id)
}

/// Sets `last_run` on the record with the given id.
///
/// Returns whether the record was found. A missing id is a warning, not an
/// error: the record may have been removed by another invocation between
/// load and update.
pub fn update_timestamp(records: &mut [CommandRecord], id: &str, when: DateTime<Utc>) -> bool {
    match records.iter_mut().find(|r| r.id == id) {
        Some(record) => {
            record.last_run = Some(when);
            true
        }
        None => {
            warn!("Could not find command with ID `{id}` to update last_run timestamp.");
            false
        }
    }
}

/// Retains records whose tag set intersects the requested tags,
/// case-insensitively. No requested tags means no filtering.
#[must_use]
pub fn filter_by_tags<'a>(
    records: &'a [CommandRecord],
    requested_tags: &[String],
) -> Vec<&'a CommandRecord> {
    if requested_tags.is_empty() {
        return records.iter().collect();
    }

    let requested: HashSet<String> = requested_tags.iter().map(|t| t.to_lowercase()).collect();

    records
        .iter()
        .filter(|r| r.tags.iter().any(|t| requested.contains(&t.to_lowercase())))
        .collect()
}

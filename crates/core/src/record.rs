use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single saved-command entry, fully migrated to the current schema.
///
/// Field order matters for the on-disk representation: `serde_json` writes
/// struct fields in declaration order, and the store file is meant to be
/// read by humans.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommandRecord {
    /// Stable join key for updates. Assigned once, never reused.
    pub id: String,
    /// Short human-chosen handle. Unique by convention only; may be blank.
    pub name: String,
    /// The literal shell command text. Never mutated after creation.
    pub command: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Last time this command ran *successfully*, not last attempt.
    pub last_run: Option<DateTime<Utc>>,
    /// Suppresses start/success chatter when this record is run.
    pub quiet: bool,
    /// Unknown fields found on disk. Carried through save so migration
    /// stays additive.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The permissive on-disk shape. Only `command` is required; everything
/// else is filled with defaults by [`CommandRecord::from_raw`].
#[derive(Deserialize, Debug, Clone)]
pub struct RawRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub command: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub last_run: Option<DateTime<Utc>>,
    pub quiet: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CommandRecord {
    /// Creates a fresh record for a newly scraped command string, with a
    /// new id and default metadata.
    #[must_use]
    pub fn new(command: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            command,
            description: String::new(),
            tags: Vec::new(),
            last_run: None,
            quiet: false,
            extra: Map::new(),
        }
    }

    /// Pure migration from the on-disk shape to the current schema.
    ///
    /// Records written by older versions may be missing any optional field;
    /// they get the documented defaults, and a missing id gets a freshly
    /// generated one. Migrating an already-complete record is a no-op.
    #[must_use]
    pub fn from_raw(raw: RawRecord) -> Self {
        Self {
            id: raw.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: raw.name.unwrap_or_default(),
            command: raw.command,
            description: raw.description.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
            last_run: raw.last_run,
            quiet: raw.quiet.unwrap_or(false),
            extra: raw.extra,
        }
    }
}

impl Display for CommandRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            // No name yet, fall back to the command itself
            formatter.write_str(&self.command)
        } else {
            formatter.write_str(&self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with_command_only() -> RawRecord {
        RawRecord {
            id: None,
            name: None,
            command: "ls -la".to_string(),
            description: None,
            tags: None,
            last_run: None,
            quiet: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_from_raw_fills_defaults() {
        let record = CommandRecord::from_raw(raw_with_command_only());

        assert!(!record.id.is_empty());
        assert_eq!(record.name, "");
        assert_eq!(record.command, "ls -la");
        assert_eq!(record.description, "");
        assert!(record.tags.is_empty());
        assert!(record.last_run.is_none());
        assert!(!record.quiet);
    }

    #[test]
    fn test_from_raw_generates_distinct_ids() {
        let first = CommandRecord::from_raw(raw_with_command_only());
        let second = CommandRecord::from_raw(raw_with_command_only());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_from_raw_is_idempotent_for_complete_records() {
        let record = CommandRecord {
            id: "fixed-id".to_string(),
            name: "list".to_string(),
            command: "ls -la".to_string(),
            description: "list everything".to_string(),
            tags: vec!["fs".to_string()],
            last_run: Some("2024-01-02T03:04:05Z".parse().unwrap()),
            quiet: true,
            extra: Map::new(),
        };

        let serialized = serde_json::to_string(&record).unwrap();
        let raw: RawRecord = serde_json::from_str(&serialized).unwrap();
        let migrated = CommandRecord::from_raw(raw);

        assert_eq!(migrated, record);
    }

    #[test]
    fn test_from_raw_preserves_unknown_fields() {
        let json = r#"{"command": "pwd", "favourite": true}"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        let record = CommandRecord::from_raw(raw);

        assert_eq!(record.extra.get("favourite"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_display_prefers_name() {
        let mut record = CommandRecord::new("cargo build".to_string());
        assert_eq!(format!("{record}"), "cargo build");

        record.name = "build".to_string();
        assert_eq!(format!("{record}"), "build");
    }
}

//! Shell history scraping.
//!
//! Reads a shell's history file and produces the most recent distinct
//! command strings, newest first. Each supported shell writes history in a
//! slightly different line format; the dialect determines which prefix to
//! strip before deduplication.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

/// Number of recent commands to offer by default
pub const DEFAULT_COMMAND_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Zsh,
    Bash,
    Fish,
}

impl Display for Dialect {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dialect::Zsh => "zsh",
            Dialect::Bash => "bash",
            Dialect::Fish => "fish",
        };
        formatter.write_str(name)
    }
}

/// Detects the most likely shell history file.
///
/// Checks a prioritized list of conventional locations under the home
/// directory and returns the first that exists, or `None` when no supported
/// history file is present (distinct from "file exists but is empty").
#[must_use]
pub fn detect_source() -> Option<(PathBuf, Dialect)> {
    let candidates = [
        ("~/.zsh_history", Dialect::Zsh),
        ("~/.bash_history", Dialect::Bash),
        ("~/.local/share/fish/fish_history", Dialect::Fish),
    ];

    for (location, dialect) in candidates {
        let path = PathBuf::from(shellexpand::tilde(location).to_string());
        if path.exists() {
            info!("Found {dialect} history at `{}`", path.display());
            return Some((path, dialect));
        }
    }

    None
}

/// Reads a history file and returns the most recent distinct commands,
/// newest first, capped at `limit`.
///
/// Lines are processed in reverse physical order to approximate recency.
/// Undecodable bytes are replaced rather than failing the read, and a read
/// error (missing file, permissions) yields an empty list with a warning —
/// "nothing to offer" rather than a fault to propagate.
#[must_use]
pub fn read_history(path: &Path, dialect: Dialect, limit: usize) -> Vec<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Could not read history file at `{}`: {e}", path.display());
            return Vec::new();
        }
    };
    let contents = String::from_utf8_lossy(&bytes);

    let mut seen: HashSet<String> = HashSet::new();
    let mut commands = Vec::new();

    for line in contents.lines().rev() {
        if commands.len() >= limit {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match dialect {
            Dialect::Zsh => strip_zsh_metadata(line),
            Dialect::Fish => line.strip_prefix("- cmd: ").unwrap_or(line),
            Dialect::Bash => line,
        };

        if !command.is_empty() && seen.insert(command.to_string()) {
            commands.push(command.to_string());
        }
    }

    commands
}

/// Strips the extended-history metadata block from a zsh history line.
///
/// Lines look like `: 1672531200:0;ls -la`; anything not matching that
/// shape is returned unchanged.
fn strip_zsh_metadata(line: &str) -> &str {
    let Some(rest) = line.strip_prefix(": ") else {
        return line;
    };
    let Some((metadata, command)) = rest.split_once(';') else {
        return line;
    };
    let Some((timestamp, duration)) = metadata.split_once(':') else {
        return line;
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if all_digits(timestamp) && all_digits(duration) {
        command
    } else {
        line
    }
}

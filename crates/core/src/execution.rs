use std::process::{Command, Stdio};

use log::debug;

use crate::error::Result;

/// How a child command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed(i32),
    /// Terminated by a signal, i.e. the user interrupted the wait.
    Interrupted,
}

/// Runs command text under a shell and blocks until it exits.
///
/// The text is handed to `shell -c` so pipes, redirects and globbing work;
/// the records are user-authored and local, so expressiveness wins over
/// injection-safety here. Stdio is inherited from the calling process.
///
/// # Errors
///
/// Returns an error if the shell process cannot be spawned or waited on. A
/// non-zero exit or signal death is an [`Outcome`], not an error.
pub fn execute_shell(command_text: &str, shell: &str) -> Result<Outcome> {
    debug!("Executing under `{shell}`: {command_text}");

    let status = Command::new(shell)
        .arg("-c")
        .arg(command_text)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()?;

    if status.success() {
        return Ok(Outcome::Success);
    }

    match status.code() {
        Some(code) => Ok(Outcome::Failed(code)),
        // No exit code means the child was killed by a signal.
        None => Ok(Outcome::Interrupted),
    }
}

/// Effective quiet mode for one run: the per-invocation flag OR the
/// record's stored flag. Only start/success notices honor this; failure
/// notices are never silenced.
#[must_use]
pub fn effective_quiet(global_quiet: bool, record_quiet: bool) -> bool {
    global_quiet || record_quiet
}

//! Ctrl-C handling for command batches.
//!
//! The interrupt signal goes to the whole foreground process group, so the
//! child being waited on dies on its own; this flag lets the batch loop
//! notice the interrupt and skip any remaining queued commands instead of
//! carrying on.

use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Installs the Ctrl-C handler. Call once, before running any commands.
pub fn install() {
    if let Err(e) = ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }) {
        warn!("Could not install Ctrl-C handler: {e}");
    }
}

#[must_use]
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

//! Verb handlers for the `hb` binary.
//!
//! Each submodule implements one CLI verb on top of the core store and the
//! [`Prompter`](crate::prompter::Prompter) abstraction. The handlers own
//! all user-facing output; the core stays silent apart from log records.

pub mod add;
pub mod edit;
pub mod list;
pub mod run;

pub use add::add;
pub use edit::edit;
pub use list::list;
pub use run::run;

//! Workflow entrypoints, one per CLI command.
//!
//! Each step builds a repository from resolved settings and reports on
//! stdout; diagnostics go through tracing.
mod init;
mod inspect;
mod update;

pub use init::run_init;
pub use inspect::{run_check, run_list, run_show};
pub use update::run_update;

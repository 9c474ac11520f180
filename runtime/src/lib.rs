//! Process-level collaborators: terminal logging and process termination.

/// Ending the process on behalf of the terminal accessors.
pub mod exit;
pub mod logger;

pub use exit::{Process, Terminate, FATAL_EXIT_CODE};
pub use logger::Logger;

/// Result of a fallible setup step. Failures are logged where they happen.
pub type Result<T = (), E = ()> = core::result::Result<T, E>;

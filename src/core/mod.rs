//! Core command logic
//!
//! One module per concern: greetings, prompting, host information and
//! working directory file operations.

pub mod greeting;
pub mod prompt;
pub mod system;
pub mod workspace;

pub use system::SystemReport;
pub use workspace::{CreateOutcome, ReadOutcome, Workspace};

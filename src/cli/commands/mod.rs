//! Command implementations for the flight distance CLI
//!
//! This module contains the command execution logic, progress reporting and
//! error handling for the CLI interface.

pub mod shared;
pub mod verify;

pub use shared::RunSummary;

use crate::Result;
use crate::cli::args::Args;

/// Main command runner
///
/// Sets up logging once, then runs the verify workflow.
pub fn run(args: Args) -> Result<RunSummary> {
    shared::setup_logging(&args)?;
    verify::run_verify(args)
}

// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::presentation::StdoutProgress;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a conversion pass with stdout progress and report keep-going failures.
///
/// # Errors
/// Returns the engine failure, or [`AppError::PartialFailure`] when
/// keep-going mode recorded any failed file.
pub fn execute(config: &Config, quiet: bool) -> Result<()> {
    let progress = StdoutProgress::new(quiet);
    let report = html_reencode_engine::run(config, &progress)?;
    presentation::print_report(&report);

    if report.is_success() {
        Ok(())
    } else {
        Err(AppError::PartialFailure {
            failed: report.errors.len(),
            total: report.attempted(),
        })
    }
}

// crates/cli/src/presentation.rs
use html_reencode_engine::progress::ProgressSink;
use html_reencode_engine::report::RunReport;
use std::io::{self, Write};
use std::path::Path;

/// Prints one line per file to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutProgress {
    pub quiet: bool,
}

impl StdoutProgress {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ProgressSink for StdoutProgress {
    fn on_file(&self, source: &Path, destination: &Path, dry_run: bool) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut out = io::stdout().lock();
        writeln!(out, "{}", progress_line(source, destination, dry_run))?;
        out.flush()
    }
}

#[must_use]
pub fn progress_line(source: &Path, destination: &Path, dry_run: bool) -> String {
    if dry_run {
        format!("Would convert {} to {}", source.display(), destination.display())
    } else {
        format!("Converting {} to UTF-8", source.display())
    }
}

/// Print keep-going failures to stderr and log the run summary.
pub fn print_report(report: &RunReport) {
    for (path, err) in &report.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }

    let verb = if report.dry_run { "would convert" } else { "converted" };
    log::info!(
        "{verb} {} files ({} charset replacements, {} failed, {} mirrored skipped)",
        report.conversions.len(),
        report.total_replacements(),
        report.errors.len(),
        report.skipped_mirrored
    );
}

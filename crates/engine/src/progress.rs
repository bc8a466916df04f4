use std::io;
use std::path::Path;

/// Receives one notification per file, before its output is written.
pub trait ProgressSink: Send + Sync {
    fn on_file(&self, source: &Path, destination: &Path, dry_run: bool) -> io::Result<()>;
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_file(&self, _source: &Path, _destination: &Path, _dry_run: bool) -> io::Result<()> {
        Ok(())
    }
}

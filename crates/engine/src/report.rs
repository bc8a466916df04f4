use crate::error::EngineError;
use std::path::PathBuf;

/// Outcome of converting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Number of content-rule matches replaced.
    pub replacements: usize,
    /// Size of the UTF-8 output (also reported for dry runs).
    pub bytes: usize,
}

/// Result of a whole run.
///
/// `errors` is only populated in keep-going mode; otherwise the first failure
/// is returned from [`crate::run`] instead.
#[derive(Debug, Default)]
pub struct RunReport {
    pub conversions: Vec<Conversion>,
    pub errors: Vec<(PathBuf, EngineError)>,
    pub skipped_mirrored: usize,
    pub dry_run: bool,
}

impl RunReport {
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.conversions.len() + self.errors.len()
    }

    #[must_use]
    pub fn total_replacements(&self) -> usize {
        self.conversions.iter().map(|c| c.replacements).sum()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

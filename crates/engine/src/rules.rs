//! Literal substitution rules applied to file contents and file paths.

use crate::error::{EngineError, Result};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const DEFAULT_FIND: &str = "charset=windows-1252";
pub const DEFAULT_REPLACE: &str = "charset=utf-8";
pub const DEFAULT_RENAME_FROM: &str = "Breviary";
pub const DEFAULT_RENAME_TO: &str = "Breviary.utf8";

/// Replaces every occurrence of `find` in a document with `replace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceRule {
    pub find: String,
    pub replace: String,
}

impl Default for ReplaceRule {
    fn default() -> Self {
        Self::new(DEFAULT_FIND, DEFAULT_REPLACE)
    }
}

impl ReplaceRule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// Apply the rule, returning the new text and the number of replacements.
    ///
    /// Text without a match is returned borrowed.
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> (Cow<'a, str>, usize) {
        if self.find.is_empty() {
            return (Cow::Borrowed(text), 0);
        }
        let count = text.matches(self.find.as_str()).count();
        if count == 0 {
            return (Cow::Borrowed(text), 0);
        }
        (Cow::Owned(text.replace(&self.find, &self.replace)), count)
    }
}

/// Maps a source path into the mirrored tree by rewriting the first `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRule {
    pub from: String,
    pub to: String,
}

impl Default for RenameRule {
    fn default() -> Self {
        Self::new(DEFAULT_RENAME_FROM, DEFAULT_RENAME_TO)
    }
}

impl RenameRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Derive the output path for `source`.
    ///
    /// # Errors
    ///
    /// Fails when the path is not UTF-8, does not contain `from`, or would map
    /// onto itself.
    pub fn derive(&self, source: &Path) -> Result<PathBuf> {
        let text = source
            .to_str()
            .ok_or_else(|| EngineError::NonUtf8Path(source.to_path_buf()))?;

        if self.from.is_empty() || !text.contains(self.from.as_str()) {
            return Err(EngineError::RenameRuleUnmatched {
                path: source.to_path_buf(),
                from: self.from.clone(),
            });
        }

        let derived = PathBuf::from(text.replacen(&self.from, &self.to, 1));
        if derived == source {
            return Err(EngineError::OutputIsSource(source.to_path_buf()));
        }
        Ok(derived)
    }

    /// True when `path` already lives in a tree this rule produced, i.e. one
    /// of its components is exactly `to`.
    ///
    /// Only meaningful when `to` extends `from` (e.g. `Breviary` ->
    /// `Breviary.utf8`); otherwise re-running could not re-mirror anything.
    #[must_use]
    pub fn is_mirrored(&self, path: &Path) -> bool {
        if self.from.is_empty() || self.to == self.from || !self.to.contains(self.from.as_str()) {
            return false;
        }
        let to = OsStr::new(self.to.as_str());
        path.components().any(|c| c.as_os_str() == to)
    }
}

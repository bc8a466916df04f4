use crate::error::{EngineError, Result};
use crate::options::InputEncoding;
use crate::rules::{RenameRule, ReplaceRule};
use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_EXTENSIONS: &[&str] = &["htm", "html"];

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "default_extensions()")]
    pub extensions: Vec<String>,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: default_extensions(),
            max_depth: None,
            follow_links: false,
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub content: ReplaceRule,
    #[builder(default)]
    pub rename: RenameRule,
    #[builder(default)]
    pub input_encoding: InputEncoding,

    #[builder(default = "true")]
    pub create_dirs: bool,
    #[builder(default)]
    pub dry_run: bool,

    /// Worker threads; `1` keeps the run sequential, `0` means one per CPU.
    #[builder(default = "1")]
    pub jobs: usize,
    #[builder(default)]
    pub keep_going: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            content: ReplaceRule::default(),
            rename: RenameRule::default(),
            input_encoding: InputEncoding::default(),
            create_dirs: true,
            dry_run: false,
            jobs: 1,
            keep_going: false,
        }
    }
}

impl Config {
    /// Reject rule combinations that cannot produce a sensible run.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.walk.extensions.is_empty() {
            return Err(EngineError::Config("at least one extension is required".into()));
        }
        if self.content.find.is_empty() {
            return Err(EngineError::Config("content search text must not be empty".into()));
        }
        if self.rename.from.is_empty() {
            return Err(EngineError::Config("rename source text must not be empty".into()));
        }
        if self.rename.from == self.rename.to {
            return Err(EngineError::Config(format!(
                "rename rule maps '{}' onto itself",
                self.rename.from
            )));
        }
        Ok(())
    }

    /// Number of worker threads after resolving `0` to the CPU count.
    #[must_use]
    pub fn effective_jobs(&self) -> usize {
        if self.jobs == 0 {
            num_cpus::get().max(1)
        } else {
            self.jobs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_breviary_layout() {
        let config = Config::default();
        assert_eq!(config.walk.extensions, vec!["htm", "html"]);
        assert_eq!(config.rename.to, "Breviary.utf8");
        assert_eq!(config.content.replace, "charset=utf-8");
        assert!(config.create_dirs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_defaults_agree_with_default_impl() {
        let built = ConfigBuilder::default().build().unwrap();
        let plain = Config::default();
        assert_eq!(built.walk.root, plain.walk.root);
        assert_eq!(built.walk.extensions, plain.walk.extensions);
        assert_eq!(built.jobs, plain.jobs);
        assert_eq!(built.create_dirs, plain.create_dirs);
    }

    #[test]
    fn validate_rejects_empty_find() {
        let config = Config {
            content: ReplaceRule::new("", "x"),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn validate_rejects_identity_rename() {
        let config = Config {
            rename: RenameRule::new("a", "a"),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_jobs_resolves_to_cpu_count() {
        let config = Config {
            jobs: 0,
            ..Config::default()
        };
        assert!(config.effective_jobs() >= 1);
    }
}

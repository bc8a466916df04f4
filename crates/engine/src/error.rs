use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Root directory '{0}' does not exist")]
    RootNotFound(PathBuf),

    #[error("Root path '{0}' is not a directory")]
    RootNotDirectory(PathBuf),

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid extension pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8 (invalid byte at offset {offset})")]
    Decode { path: PathBuf, offset: usize },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to report progress: {0}")]
    Progress(#[source] std::io::Error),

    #[error("Path '{path}' does not contain '{from}'; refusing to derive an output path")]
    RenameRuleUnmatched { path: PathBuf, from: String },

    #[error("Output path for '{0}' is the source file itself")]
    OutputIsSource(PathBuf),

    #[error("Path '{0}' is not valid UTF-8")]
    NonUtf8Path(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, EngineError>;

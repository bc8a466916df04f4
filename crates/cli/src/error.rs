// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] html_reencode_engine::error::EngineError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("{failed} of {total} files failed to convert")]
    PartialFailure { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, AppError>;

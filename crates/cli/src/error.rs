// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] rg_helper_engine::error::StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown template '{0}' (see --list-templates)")]
    UnknownTemplate(String),

    #[error("no config directory on this platform; pass --state-file")]
    NoStateDir,
}

pub type Result<T> = std::result::Result<T, AppError>;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScopeholdError {
    #[error("file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("domain must not be empty")]
    EmptyDomain,

    #[error("store error: {0}")]
    Store(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScopeholdError {
    /// Process exit code for this error. Logical not-found outcomes are not
    /// errors and never reach this mapping; they exit 0.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyDomain => 2,
            Self::FileNotFound { .. } => 3,
            Self::Store(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScopeholdError>;

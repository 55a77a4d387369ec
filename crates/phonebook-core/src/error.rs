use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("key separator cannot be empty")]
    EmptyKeySeparator,
    #[error("field separator cannot be empty")]
    EmptyFieldSeparator,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

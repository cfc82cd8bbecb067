//! Site build errors

use lambda7_core::Lambda7Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File watcher error: {0}")]
    Notify(#[from] notify::Error),

    #[error("{0}")]
    Engine(#[from] Lambda7Error),
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}

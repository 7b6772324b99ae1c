use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("part count must be at least 1 (got {0})")]
    InvalidPartCount(usize),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SplitError::Io {
            path: path.into(),
            source,
        }
    }
}

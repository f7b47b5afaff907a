//! Errors raised while reading logs and writing decoded output

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[source] io::Error),

    #[error("{name}:{line}: {source}")]
    Decode {
        name: String,
        line: usize,
        #[source]
        source: bromlog_core::Error,
    },
}

impl Error {
    /// Output was closed by the reader (e.g. piped into `head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! The error type shared by the loader and the formula containers

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be opened or read
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of the input isn't well formed
    #[error("line {line}: invalid token \"{token}\": {reason}")]
    Format {
        line: usize,
        token: String,
        reason: &'static str,
    },

    /// Growing a clause list or the symbol table failed
    #[error("out of memory: {0}")]
    Allocation(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;

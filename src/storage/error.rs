//! Persistence errors

use std::io;
use std::path::PathBuf;

/// A store could not be read, written, or understood
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed save data at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

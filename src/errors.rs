//! Typed error definitions for mavica_copy.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MavicaCopyError {
    #[error("{0} does not exist")]
    MissingPath(PathBuf),

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("metadata of {path} does not include a readable modification timestamp")]
    MtimeUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "wiping the floppy disk requires root privileges; try running again with `sudo`"
    )]
    PrivilegeRequired,

    #[error("invalid owner '{0}': expected UID:GID (e.g. 1000:1000)")]
    InvalidOwner(String),
}

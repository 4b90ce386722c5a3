//! Error types for job file loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a job file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid job document.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The same job name appears more than once and duplicates are rejected.
    #[error("duplicate job name in {}: {name}", .path.display())]
    DuplicateName { path: PathBuf, name: String },
}

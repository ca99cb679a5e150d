//! Error types for trialbench
//!
//! Two tiers: sink failures abort the run, workload failures become a
//! report line and the batch moves on.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// trialbench error types
#[derive(Error, Debug)]
pub enum Error {
    /// Report sink could not be created or truncated (fatal)
    #[error("cannot create report at {}: {source}", path.display())]
    ReportInit {
        /// Requested report location
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Workload reported a failure; the message is rendered verbatim
    #[error("{0}")]
    Workload(String),

    /// Workload panicked; carries the panic payload text
    #[error("{0}")]
    Panicked(String),

    /// JSON encode/decode error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a workload failure from a message.
    #[must_use]
    pub fn workload(message: impl Into<String>) -> Self {
        Self::Workload(message.into())
    }
}

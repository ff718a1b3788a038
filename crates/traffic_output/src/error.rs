//! Error type for sample sinks.

use std::path::PathBuf;
use thiserror::Error;
use traffic_core::types::InvalidParameter;

/// Failures while publishing a sample to a sink.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Filesystem write failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The sample cannot be rendered (empty, or degenerate bin request).
    #[error(transparent)]
    InvalidSample(#[from] InvalidParameter),
}

//! CLI error type.

use thiserror::Error;

/// Convenience alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the `trafgen` commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Generation kernel rejected the inputs.
    #[error(transparent)]
    Generator(#[from] traffic_core::types::GeneratorError),

    /// A sample sink failed.
    #[error(transparent)]
    Output(#[from] traffic_output::OutputError),

    /// Unrecognised `--format` value.
    #[error("unknown output format '{0}': expected 'table' or 'json'")]
    UnknownFormat(String),

    /// JSON serialisation failed.
    #[error("failed to serialise result: {0}")]
    Serialise(#[from] serde_json::Error),
}

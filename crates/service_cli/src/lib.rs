//! Library surface of the `trafgen` CLI.
//!
//! The binary in `main.rs` is a thin clap wrapper; the command
//! implementations live here so integration tests can drive them without
//! spawning a process.

pub mod commands;
pub mod error;

pub use error::{CliError, Result};

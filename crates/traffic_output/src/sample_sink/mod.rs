//! Sample output destinations.
//!
//! This module provides the sink abstraction plus the two destinations the
//! traffic scenarios use: a plain text dump and an SVG histogram.

mod svg_plotter;
mod text_writer;

pub use svg_plotter::SvgHistogramPlotter;
pub use text_writer::TextFileWriter;

use crate::OutputError;
use std::path::PathBuf;

/// A titled sample headed for a sink.
///
/// Borrows the sequence; publishing never clones or mutates the data.
#[derive(Debug, Clone, Copy)]
pub struct SampleReport<'a> {
    /// Human-readable title (used by rendering sinks).
    pub title: &'a str,
    /// Filename stem, typically timestamp-derived; the sink appends its
    /// own extension.
    pub stem: &'a str,
    /// The sequence to publish.
    pub values: &'a [f64],
}

/// Sample output destination.
///
/// Strategy-style capability object: callers hold a set of sinks and
/// publish each produced sequence to all of them, keeping generation free
/// of any rendering or filesystem concern.
pub trait SampleSink: Send + Sync {
    /// Publishes a sample, returning the path written.
    fn publish(&self, report: &SampleReport<'_>) -> Result<PathBuf, OutputError>;
}

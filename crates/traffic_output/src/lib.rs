//! # traffic_output: Sample Sinks for Generated Traffic
//!
//! Output destinations for sequences produced by `traffic_core`. Each sink
//! is a read-only consumer: it summarises, renders or dumps a sample
//! without ever feeding anything back into generation.
//!
//! - [`sample_sink::TextFileWriter`]: line-delimited text dump, one value
//!   per line
//! - [`sample_sink::SvgHistogramPlotter`]: histogram rendered as SVG markup
//! - [`timestamp::timestamp_stem`]: timestamp-derived filename stems
//!
//! Sinks implement the [`sample_sink::SampleSink`] trait so the pure
//! numeric core stays testable without any filesystem dependency.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;

pub mod sample_sink;
pub mod timestamp;

pub use error::OutputError;

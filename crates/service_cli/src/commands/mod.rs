//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The shared helpers
//! here publish a sample to both sinks and print the outcome.

pub mod demo;
pub mod generate;
pub mod reference;
pub mod variates;

use crate::{CliError, Result};
use serde::Serialize;
use std::path::PathBuf;
use traffic_core::stats::{summarise, SequenceSummary};
use traffic_output::sample_sink::{SampleReport, SampleSink, SvgHistogramPlotter, TextFileWriter};

/// Outcome of one generation run, for user-facing output.
#[derive(Debug, Serialize)]
pub struct RunOutcome {
    /// Chart/report title.
    pub title: String,
    /// Sample moments.
    pub summary: SequenceSummary,
    /// Path of the line-delimited text dump.
    pub text_path: PathBuf,
    /// Path of the SVG histogram; absent for an empty sample.
    pub svg_path: Option<PathBuf>,
}

/// Publishes a sample to the text and histogram sinks under one stem.
///
/// An empty sample still produces its (empty) text dump but has no
/// histogram to draw, so the plot is skipped rather than failed.
pub(crate) fn publish_sample(
    writer: &TextFileWriter,
    plotter: &SvgHistogramPlotter,
    title: &str,
    stem: &str,
    values: &[f64],
) -> Result<RunOutcome> {
    let report = SampleReport {
        title,
        stem,
        values,
    };

    let text_path = writer.publish(&report)?;
    let svg_path = if values.is_empty() {
        None
    } else {
        Some(plotter.publish(&report)?)
    };

    Ok(RunOutcome {
        title: title.to_string(),
        summary: summarise(values),
        text_path,
        svg_path,
    })
}

/// Prints an outcome in the requested format (`table` or `json`).
pub(crate) fn emit(outcome: &RunOutcome, format: &str) -> Result<()> {
    match format {
        "table" => {
            println!("{}", outcome.title);
            println!("  values    {}", outcome.summary.count);
            println!("  mean      {:.6}", outcome.summary.mean);
            println!("  variance  {:.6}", outcome.summary.variance);
            println!("  st.dev    {:.6}", outcome.summary.std_dev);
            println!("  text      {}", outcome.text_path.display());
            match &outcome.svg_path {
                Some(path) => println!("  svg       {}", path.display()),
                None => println!("  svg       (skipped: empty sample)"),
            }
        }
        "json" => println!("{}", serde_json::to_string_pretty(outcome)?),
        other => return Err(CliError::UnknownFormat(other.to_string())),
    }
    Ok(())
}

//! `trafgen variates` - exponential variates through the full pipeline.

use super::{emit, publish_sample};
use crate::Result;
use tracing::info;
use traffic_core::lcg::{self, LcgParams};
use traffic_core::variate::exponential;
use traffic_output::sample_sink::{SvgHistogramPlotter, TextFileWriter};
use traffic_output::timestamp::timestamp_stem;

/// Chart title for inverse-transform variate samples.
pub const TITLE: &str = "Inverse Transform Random Variates (Exponential Distribution)";

/// Runs the LCG and inverse-transform pipeline, persists and plots the
/// derived variate sequence, prints the summary.
pub fn run(
    count: usize,
    params: &LcgParams,
    lambda: f64,
    bins: usize,
    format: &str,
    output_dir: &str,
) -> Result<()> {
    info!(count, lambda, "generating exponential variates");
    let uniforms = lcg::generate(count, params)?;
    let variates = exponential(&uniforms, lambda)?;

    let writer = TextFileWriter::new(output_dir);
    let plotter = SvgHistogramPlotter::new(output_dir).with_bin_count(bins);

    // The persisted and plotted sequence is the variate sample itself; the
    // uniform input is an intermediate, not a deliverable.
    let outcome = publish_sample(&writer, &plotter, TITLE, &timestamp_stem(), &variates)?;
    emit(&outcome, format)
}

//! `trafgen generate` - uniform sample via the linear congruential method.

use super::{emit, publish_sample};
use crate::Result;
use tracing::info;
use traffic_core::lcg::{self, LcgParams};
use traffic_output::sample_sink::{SvgHistogramPlotter, TextFileWriter};
use traffic_output::timestamp::timestamp_stem;

/// Chart title for uniform samples.
pub const TITLE: &str = "Linear Congruential Random Number Generation";

/// Generates a uniform sample, persists and plots it, prints the summary.
pub fn run(
    count: usize,
    params: &LcgParams,
    bins: usize,
    format: &str,
    output_dir: &str,
) -> Result<()> {
    info!(
        count,
        seed = params.seed,
        increment = params.increment,
        multiplier = params.multiplier,
        modulus = params.modulus,
        "generating uniform sample"
    );
    let uniforms = lcg::generate(count, params)?;

    let writer = TextFileWriter::new(output_dir);
    let plotter = SvgHistogramPlotter::new(output_dir).with_bin_count(bins);
    let outcome = publish_sample(&writer, &plotter, TITLE, &timestamp_stem(), &uniforms)?;
    emit(&outcome, format)
}

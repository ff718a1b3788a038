//! `trafgen demo` - the traffic study's full scenario sweep.
//!
//! Reproduces the original study: uniform samples at two sizes for both
//! parameter sets, the inverse-transform variate sample derived from the
//! large drand48-family run, and the library reference sample.

use super::{emit, generate, publish_sample, reference, variates};
use crate::Result;
use tracing::info;
use traffic_core::lcg::{self, LcgParams};
use traffic_core::variate::exponential;
use traffic_output::sample_sink::{SvgHistogramPlotter, TextFileWriter};
use traffic_output::timestamp::timestamp_stem;

/// Rate parameter of the variate scenarios.
const LAMBDA: f64 = 3.0;

/// Seed of the library reference sample.
const REFERENCE_SEED: u64 = 5;

/// Sample sizes swept per parameter set.
const SWEEP_SIZES: [usize; 2] = [1_024, 102_400];

/// Timestamp stems have millisecond precision; consecutive scenarios can
/// land in the same millisecond, so each stem carries its scenario number.
fn scenario_stem(index: usize) -> String {
    format!("{}_{:02}", timestamp_stem(), index)
}

/// Runs every scenario, publishing each sample to both sinks.
pub fn run(bins: usize, format: &str, output_dir: &str) -> Result<()> {
    let writer = TextFileWriter::new(output_dir);
    let plotter = SvgHistogramPlotter::new(output_dir).with_bin_count(bins);

    let textbook = LcgParams::new(7, 0, 11, 1_024);
    let drand = LcgParams::new(7, 11, 25_214_903_917, 1 << 48);

    info!("running the traffic scenario sweep");
    let mut scenario = 0;

    for params in [textbook, drand] {
        for count in SWEEP_SIZES {
            let uniforms = lcg::generate(count, &params)?;
            let outcome = publish_sample(
                &writer,
                &plotter,
                generate::TITLE,
                &scenario_stem(scenario),
                &uniforms,
            )?;
            info!(scenario, count, "uniform scenario complete");
            emit(&outcome, format)?;
            scenario += 1;
        }
    }

    let uniforms = lcg::generate(SWEEP_SIZES[1], &drand)?;
    let variate_sample = exponential(&uniforms, LAMBDA)?;
    let outcome = publish_sample(
        &writer,
        &plotter,
        variates::TITLE,
        &scenario_stem(scenario),
        &variate_sample,
    )?;
    info!(scenario, lambda = LAMBDA, "variate scenario complete");
    emit(&outcome, format)?;
    scenario += 1;

    let sample = reference::draw(SWEEP_SIZES[1], LAMBDA, REFERENCE_SEED)?;
    let outcome = publish_sample(
        &writer,
        &plotter,
        reference::TITLE,
        &scenario_stem(scenario),
        &sample,
    )?;
    info!(scenario, "library reference scenario complete");
    emit(&outcome, format)
}

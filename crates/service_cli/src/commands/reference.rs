//! `trafgen reference` - library-drawn exponential sample.
//!
//! Draws from `rand_distr`'s exponential distribution with a seeded PRNG,
//! giving an independent sample to cross-check the inverse-transform
//! pipeline against. Note that `Exp` takes the rate λ directly, where
//! scale-parameterised libraries take 1/λ.

use super::{emit, publish_sample};
use crate::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Exp};
use tracing::info;
use traffic_core::types::{GeneratorError, InvalidParameter};
use traffic_output::sample_sink::{SvgHistogramPlotter, TextFileWriter};
use traffic_output::timestamp::timestamp_stem;

/// Chart title for library-drawn samples.
pub const TITLE: &str = "Exponential Distribution Using the Library Sampler";

/// Draws `count` Exponential(`lambda`) variates from a seeded `StdRng`.
///
/// The same seed always produces the same sample.
pub fn draw(count: usize, lambda: f64, seed: u64) -> Result<Vec<f64>> {
    let distribution = Exp::new(lambda)
        .map_err(|_| GeneratorError::from(InvalidParameter::NonPositiveRate(lambda)))?;
    let mut rng = StdRng::seed_from_u64(seed);

    Ok((0..count).map(|_| distribution.sample(&mut rng)).collect())
}

/// Draws a library reference sample, persists and plots it, prints the
/// summary.
pub fn run(
    count: usize,
    lambda: f64,
    seed: u64,
    bins: usize,
    format: &str,
    output_dir: &str,
) -> Result<()> {
    info!(count, lambda, seed, "drawing library reference sample");
    let sample = draw(count, lambda, seed)?;

    let writer = TextFileWriter::new(output_dir);
    let plotter = SvgHistogramPlotter::new(output_dir).with_bin_count(bins);
    let outcome = publish_sample(&writer, &plotter, TITLE, &timestamp_stem(), &sample)?;
    emit(&outcome, format)
}

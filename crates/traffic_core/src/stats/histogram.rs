//! Equal-width histogram binning.

use crate::types::InvalidParameter;

/// Default number of bins for sample histograms.
pub const DEFAULT_BIN_COUNT: usize = 30;

/// An equal-width histogram over a non-empty sample.
///
/// Bins span `[lower, upper]`, the sample's observed range. Interior bins
/// are half-open; the final bin is closed so the maximum observation is
/// counted rather than dropped.
///
/// # Examples
///
/// ```rust
/// use traffic_core::stats::Histogram;
///
/// let histogram = Histogram::from_sample(&[0.0, 0.1, 0.4, 0.9], 10).unwrap();
/// assert_eq!(histogram.bin_count(), 10);
/// assert_eq!(histogram.counts().iter().sum::<usize>(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    lower: f64,
    upper: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bins a sample into `bin_count` equal-width bins over its range.
    ///
    /// A degenerate sample whose values are all identical has zero width;
    /// every observation lands in the final bin.
    ///
    /// # Errors
    ///
    /// - [`InvalidParameter::ZeroBinCount`] if `bin_count == 0`
    /// - [`InvalidParameter::EmptySample`] if `data` is empty
    pub fn from_sample(data: &[f64], bin_count: usize) -> Result<Self, InvalidParameter> {
        if bin_count == 0 {
            return Err(InvalidParameter::ZeroBinCount);
        }
        if data.is_empty() {
            return Err(InvalidParameter::EmptySample);
        }

        let lower = data.iter().copied().fold(f64::INFINITY, f64::min);
        let upper = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = upper - lower;

        let mut counts = vec![0usize; bin_count];
        if span == 0.0 {
            counts[bin_count - 1] = data.len();
            return Ok(Self {
                lower,
                upper,
                counts,
            });
        }

        for &value in data {
            let index = ((value - lower) / span * bin_count as f64) as usize;
            // the maximum observation maps to bin_count; close the final bin
            counts[index.min(bin_count - 1)] += 1;
        }

        Ok(Self {
            lower,
            upper,
            counts,
        })
    }

    /// Lower edge of the first bin (the sample minimum).
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper edge of the last bin (the sample maximum).
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Number of bins.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Width of each bin.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.counts.len() as f64
    }

    /// Occurrence count per bin, in ascending bin order.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Largest single-bin count; zero only for an all-degenerate sample of
    /// zero observations, which `from_sample` rejects.
    #[inline]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

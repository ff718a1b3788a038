//! Sample moments.

/// Moments of a generated sample.
///
/// `variance` is the population variance (normalised by `n`, not `n - 1`),
/// and `std_dev` is its square root.
///
/// # Examples
///
/// ```rust
/// use traffic_core::stats::summarise;
///
/// let summary = summarise(&[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(summary.count, 4);
/// assert_eq!(summary.mean, 2.5);
/// assert_eq!(summary.variance, 1.25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceSummary {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Computes mean, population variance and standard deviation of a sample.
///
/// An empty sample has a count of zero and NaN moments; the mean of nothing
/// is undefined rather than zero.
pub fn summarise(data: &[f64]) -> SequenceSummary {
    if data.is_empty() {
        return SequenceSummary {
            count: 0,
            mean: f64::NAN,
            variance: f64::NAN,
            std_dev: f64::NAN,
        };
    }

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data
        .iter()
        .map(|value| {
            let deviation = value - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / n;

    SequenceSummary {
        count: data.len(),
        mean,
        variance,
        std_dev: variance.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_of_constant_sample() {
        let summary = summarise(&[2.5; 10]);
        assert_eq!(summary.count, 10);
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_summary_hand_computed() {
        let summary = summarise(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(summary.count, 5);
        assert_relative_eq!(summary.mean, 3.0);
        assert_relative_eq!(summary.variance, 2.0);
        assert_relative_eq!(summary.std_dev, 2.0_f64.sqrt());
    }

    #[test]
    fn test_summary_of_empty_sample() {
        let summary = summarise(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.variance.is_nan());
        assert!(summary.std_dev.is_nan());
    }

    #[test]
    fn test_summary_does_not_mutate_input() {
        let data = vec![0.25, 0.5, 0.75];
        let before = data.clone();
        let _ = summarise(&data);
        assert_eq!(data, before);
    }
}

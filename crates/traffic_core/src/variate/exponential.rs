//! Exponential variates via the probability integral transform.

use crate::types::{DomainError, GeneratorError, InvalidParameter};

/// Transforms a uniform sequence into Exponential(`lambda`) variates.
///
/// For each uniform value `u`, in order, computes `-ln(1 - u) / lambda` and
/// appends it to the output, so the result pairs positionally with the
/// input. The transform is stateless: each call is a pure function of its
/// explicit arguments and the input slice is never mutated.
///
/// Inputs are validated eagerly. The upstream LCG produces values strictly
/// below 1 by construction, but a value of exactly 1.0 arriving from
/// elsewhere would require `ln(0)`; it is rejected instead of propagating
/// negative infinity, and nothing is returned on failure.
///
/// # Arguments
///
/// * `uniforms` - Uniform(0,1) draws, each in [0, 1)
/// * `lambda` - Rate parameter of the target distribution (strictly positive);
///   the distribution's mean is `1 / lambda`
///
/// # Errors
///
/// - [`InvalidParameter::NonPositiveRate`] if `lambda` is zero, negative or NaN
/// - [`DomainError::UniformOutOfRange`] if any input value falls outside
///   [0, 1); the error carries the first offending index and value
///
/// # Examples
///
/// ```rust
/// use traffic_core::variate::exponential;
///
/// // -ln(1 - 0) = 0: a zero draw maps to a zero variate.
/// let variates = exponential(&[0.0], 3.0).unwrap();
/// assert_eq!(variates, vec![0.0]);
///
/// // A value of exactly 1.0 is a domain error, not negative infinity.
/// assert!(exponential(&[0.5, 1.0], 3.0).is_err());
/// ```
pub fn exponential(uniforms: &[f64], lambda: f64) -> Result<Vec<f64>, GeneratorError> {
    if !(lambda > 0.0) {
        return Err(InvalidParameter::NonPositiveRate(lambda).into());
    }
    for (index, &value) in uniforms.iter().enumerate() {
        if !(0.0..1.0).contains(&value) {
            return Err(DomainError::UniformOutOfRange { index, value }.into());
        }
    }

    Ok(uniforms
        .iter()
        .map(|&u| -(1.0 - u).ln() / lambda)
        .collect())
}

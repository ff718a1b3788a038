//! The linear congruential generation loop.

use super::params::LcgParams;
use crate::types::GeneratorError;

/// Largest f64 strictly below 1.0.
///
/// Moduli above 2^53 can round the `state / modulus` quotient up to exactly
/// 1.0; clamping keeps the half-open [0, 1) contract for every output.
const MAX_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Generates `count` normalised pseudo-random values from the LCG recurrence.
///
/// Maintains a running integer state initialised to `params.seed`; each
/// iteration updates `state = (multiplier * state + increment) mod modulus`
/// and appends `state / modulus` to the output. The sequence is returned in
/// strict generation order, so callers can pair it positionally with derived
/// variate sequences.
///
/// The recurrence is evaluated in `u128`, so `multiplier * state + increment`
/// cannot overflow for any `u64` parameters; the drand48-scale multipliers
/// (a ≈ 2^48) that overflow a 64-bit intermediate are handled exactly.
///
/// # Arguments
///
/// * `count` - Number of values to produce; zero yields an empty sequence
/// * `params` - The recurrence parameters, validated eagerly
///
/// # Errors
///
/// Fails before producing any output if the parameter set is invalid; see
/// [`LcgParams::validate`]. `modulus == 0` is rejected regardless of the
/// other arguments, including `count == 0`.
///
/// # Examples
///
/// ```rust
/// use traffic_core::lcg::{generate, LcgParams};
///
/// let params = LcgParams::new(7, 0, 11, 1_024);
///
/// // Deterministic: the same inputs always yield the same sequence.
/// let first = generate(1_024, &params).unwrap();
/// let second = generate(1_024, &params).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn generate(count: usize, params: &LcgParams) -> Result<Vec<f64>, GeneratorError> {
    params.validate()?;

    let multiplier = u128::from(params.multiplier);
    let increment = u128::from(params.increment);
    let modulus = u128::from(params.modulus);
    let norm = params.modulus as f64;

    let mut state = u128::from(params.seed);
    let mut sequence = Vec::with_capacity(count);
    for _ in 0..count {
        state = (multiplier * state + increment) % modulus;
        sequence.push((state as f64 / norm).min(MAX_BELOW_ONE));
    }
    Ok(sequence)
}

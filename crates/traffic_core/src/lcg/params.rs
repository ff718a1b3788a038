//! LCG parameter set and validation.

use crate::types::{DomainError, GeneratorError, InvalidParameter};

/// Parameters of the linear congruential recurrence.
///
/// Immutable value object; construct one per generation call and pass it by
/// reference. Nothing in the kernel retains it.
///
/// The number of values to produce is deliberately *not* part of this
/// struct: it is an argument of [`generate`](super::generate), so one
/// parameter set can drive samples of different sizes.
///
/// # Examples
///
/// ```rust
/// use traffic_core::lcg::LcgParams;
///
/// // The drand48-family parameters exercised by the traffic scenarios.
/// let params = LcgParams::new(7, 11, 25_214_903_917, 1 << 48);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LcgParams {
    /// Initial state X0.
    pub seed: u64,
    /// Additive constant c.
    pub increment: u64,
    /// Multiplier a (at least 1).
    pub multiplier: u64,
    /// Modulus m (at least 1, the period bound).
    pub modulus: u64,
}

impl LcgParams {
    /// Creates a parameter set without validating it.
    ///
    /// Validation happens eagerly inside [`generate`](super::generate); call
    /// [`validate`](Self::validate) directly to check a set up front.
    #[inline]
    pub fn new(seed: u64, increment: u64, multiplier: u64, modulus: u64) -> Self {
        Self {
            seed,
            increment,
            multiplier,
            modulus,
        }
    }

    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// - [`DomainError::ZeroModulus`] if `modulus == 0` (the recurrence
    ///   reduces modulo `m`, so a zero modulus divides by zero)
    /// - [`InvalidParameter::ZeroMultiplier`] if `multiplier == 0`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traffic_core::lcg::LcgParams;
    /// use traffic_core::types::{DomainError, GeneratorError};
    ///
    /// let params = LcgParams::new(7, 0, 11, 0);
    /// assert_eq!(
    ///     params.validate(),
    ///     Err(GeneratorError::Domain(DomainError::ZeroModulus))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.modulus == 0 {
            return Err(DomainError::ZeroModulus.into());
        }
        if self.multiplier == 0 {
            return Err(InvalidParameter::ZeroMultiplier.into());
        }
        Ok(())
    }
}

impl Default for LcgParams {
    /// The small textbook parameter set used by the original traffic
    /// scenarios: X0 = 7, c = 0, a = 11, m = 1024.
    fn default() -> Self {
        Self::new(7, 0, 11, 1_024)
    }
}

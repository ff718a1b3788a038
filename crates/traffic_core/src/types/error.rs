//! Error types for structured error handling.
//!
//! This module provides:
//! - `DomainError`: Numeric-domain failures (zero modulus, logarithm of a
//!   non-positive argument)
//! - `InvalidParameter`: Out-of-range caller inputs (non-positive rate,
//!   degenerate multiplier, empty histogram requests)
//! - `GeneratorError`: Umbrella error returned by the public operations

use thiserror::Error;

/// Numeric-domain failures.
///
/// Raised when an operation would produce a mathematically undefined result
/// (division by zero, logarithm of a non-positive argument). Inputs are
/// validated eagerly so these never surface as silent NaN or infinity.
///
/// # Variants
/// - `ZeroModulus`: The LCG recurrence reduces modulo `m`; `m = 0` divides by zero
/// - `UniformOutOfRange`: A value outside [0, 1) has no defined exponential variate
///
/// # Examples
/// ```
/// use traffic_core::types::DomainError;
///
/// let err = DomainError::UniformOutOfRange { index: 3, value: 1.0 };
/// assert!(format!("{}", err).contains("outside [0, 1)"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Modulus of zero (the recurrence divides by the modulus).
    #[error("modulus must be positive: the LCG recurrence reduces modulo m")]
    ZeroModulus,

    /// Uniform input outside the half-open unit interval.
    ///
    /// A value of exactly 1.0 would require `ln(0)`; anything outside
    /// [0, 1) is not a Uniform(0,1) draw.
    #[error("uniform value {value} at index {index} is outside [0, 1)")]
    UniformOutOfRange {
        /// Position of the offending value in the input sequence.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

/// Out-of-range caller inputs.
///
/// # Variants
/// - `NonPositiveRate`: Exponential rate λ must be strictly positive
/// - `ZeroMultiplier`: The LCG multiplier must be at least 1
/// - `ZeroBinCount`: A histogram needs at least one bin
/// - `EmptySample`: A histogram needs at least one observation
///
/// # Examples
/// ```
/// use traffic_core::types::InvalidParameter;
///
/// let err = InvalidParameter::NonPositiveRate(-2.0);
/// assert!(format!("{}", err).contains("strictly positive"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidParameter {
    /// Exponential rate parameter was zero, negative or NaN.
    #[error("rate parameter lambda must be strictly positive, got {0}")]
    NonPositiveRate(f64),

    /// LCG multiplier below the minimum of 1.
    #[error("multiplier must be at least 1")]
    ZeroMultiplier,

    /// Histogram requested with no bins.
    #[error("histogram bin count must be at least 1")]
    ZeroBinCount,

    /// Histogram requested over an empty sample.
    #[error("cannot bin an empty sample")]
    EmptySample,
}

/// Umbrella error for the generation kernel.
///
/// Both specific kinds convert into this type via `From`, so callers can
/// propagate with `?` and still match on the failure class.
///
/// # Examples
/// ```
/// use traffic_core::types::{DomainError, GeneratorError};
///
/// let err: GeneratorError = DomainError::ZeroModulus.into();
/// assert!(matches!(err, GeneratorError::Domain(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// Mathematically undefined operation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Parameter outside its documented range.
    #[error(transparent)]
    Parameter(#[from] InvalidParameter),
}

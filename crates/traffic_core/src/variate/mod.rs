//! Random variate generation via inverse-transform sampling.
//!
//! Maps a Uniform(0,1) sequence to a target distribution by applying the
//! distribution's inverse cumulative distribution function to every draw.
//! Only the exponential distribution is supported; its inverse CDF has the
//! closed form `-ln(1 - u) / lambda`.
//!
//! ## Usage Example
//!
//! ```rust
//! use traffic_core::variate::exponential;
//!
//! let variates = exponential(&[0.0, 0.5, 0.9], 3.0).unwrap();
//! assert_eq!(variates.len(), 3);
//! assert_eq!(variates[0], 0.0);
//! ```

mod exponential;

pub use exponential::exponential;

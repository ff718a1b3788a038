//! # traffic_core: Deterministic Generation Kernel for Synthetic Network Traffic
//!
//! ## Core Layer Role
//!
//! traffic_core is the bottom layer of the workspace, providing:
//! - Linear congruential pseudo-random number generation (`lcg`)
//! - Inverse-transform exponential variate generation (`variate`)
//! - Sample summary statistics and histogram binning (`stats`)
//! - Error types: `DomainError`, `InvalidParameter`, `GeneratorError` (`types::error`)
//!
//! ## Purity Principle
//!
//! Every operation in this crate is a pure function of its explicit inputs:
//! no I/O, no logging, no retained state between calls, and identical
//! arguments always produce identical results. The running LCG accumulator
//! lives on the stack of a single `generate` call and is never cached.
//! Sequences are produced in strict generation order, so later stages can
//! rely on positional correspondence with their inputs.
//!
//! ## Minimal Dependency Principle
//!
//! The core layer has no dependencies on other trafgen crates, with minimal
//! external dependencies:
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use traffic_core::lcg::{generate, LcgParams};
//! use traffic_core::stats::summarise;
//! use traffic_core::variate::exponential;
//!
//! // A uniform sample from the LCG recurrence X(n+1) = (a*X(n) + c) mod m.
//! let params = LcgParams::new(7, 0, 11, 1_024);
//! let uniforms = generate(1_024, &params).unwrap();
//! assert!(uniforms.iter().all(|&u| (0.0..1.0).contains(&u)));
//!
//! // Exponentially distributed variates via the inverse-CDF transform.
//! let variates = exponential(&uniforms, 3.0).unwrap();
//! assert_eq!(variates.len(), uniforms.len());
//!
//! // Sample moments for reporting.
//! let summary = summarise(&variates);
//! assert!((summary.mean - 1.0 / 3.0).abs() < 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod lcg;
pub mod stats;
pub mod types;
pub mod variate;

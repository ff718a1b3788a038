//! Summary statistics and histogram binning for generated samples.
//!
//! Read-only consumers of a produced sequence: nothing here mutates or
//! retains its input.

mod histogram;
mod summary;

pub use histogram::{Histogram, DEFAULT_BIN_COUNT};
pub use summary::{summarise, SequenceSummary};

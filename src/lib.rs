//! avg-and-max: arithmetic mean and maximum over f64 sequences.
//!
//! Two pure functions plus a one-pass summary. Empty input is signalled
//! with sentinel values: NaN for the mean, negative infinity for the
//! maximum.

pub mod stats;

pub use stats::{approx_eq, average, max, summarize, Summary};

//! Sequence statistics over `f64` slices.
//!
//! All functions are pure and total: undefined results are signalled with
//! sentinel values (NaN, negative infinity) rather than errors.

#![allow(clippy::cast_precision_loss)]

use serde::{Deserialize, Serialize};

/// Computes the arithmetic mean of a sequence.
///
/// Returns `f64::NAN` for an empty sequence: the mean of zero elements is
/// undefined, and a NaN sentinel signals that where zero would mislead.
///
/// To average a prefix, slice at the call site: `average(&values[..n])`.
#[must_use]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the greatest value in a sequence via a single linear scan.
///
/// Returns `f64::NEG_INFINITY` for an empty sequence, so the result
/// compares less than any finite or special value. NaN elements are
/// skipped in favour of comparable values (`f64::max` semantics).
#[must_use]
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// One-pass summary of a sequence.
///
/// An empty sequence carries the same sentinels as the standalone
/// functions: `mean` is NaN and `max` is negative infinity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Greatest value.
    pub max: f64,
    /// Number of elements summarized.
    pub count: usize,
}

/// Computes mean and maximum in a single pass over the sequence.
#[must_use]
pub fn summarize(values: &[f64]) -> Summary {
    let mut sum = 0.0;
    let mut running_max = f64::NEG_INFINITY;
    for &v in values {
        sum += v;
        running_max = running_max.max(v);
    }

    let mean = if values.is_empty() {
        f64::NAN
    } else {
        sum / values.len() as f64
    };

    Summary {
        mean,
        max: running_max,
        count: values.len(),
    }
}

/// Checks if actual value is within an absolute tolerance of expected value.
///
/// NaN never compares approximately equal to anything.
#[inline]
#[must_use]
pub fn approx_eq(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}

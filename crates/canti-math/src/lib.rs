//! Deterministic numeric helpers.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
///
/// Exact ties go to the even neighbour, so `0.125` rounds to `0.12`.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Mean of `count` lengths summing to `total`, rounded to 2 decimals.
///
/// Returns `None` when `count` is zero.
#[must_use]
pub fn mean_len(total: usize, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(round_f64(total as f64 / count as f64, 2))
    }
}

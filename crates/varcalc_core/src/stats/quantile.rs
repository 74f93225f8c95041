//! Empirical quantiles with linear interpolation between order statistics
//!
//! Uses the continuous ("type 7") definition: the fractional rank of
//! probability `q` in a sorted sample of `n` values is `q * (n - 1)`.

/// Linear-interpolation quantile of `values` at probability `q`.
///
/// The input may be in any order and is left untouched. Returns `NaN`
/// for an empty slice. `q` is clamped into `[0, 1]`, so `q = 0` yields
/// the minimum and `q = 1` the maximum.
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    quantile_in_place(&mut sorted, q)
}

/// Same as [`quantile`], but sorts `values` in place instead of copying.
///
/// Used by the Monte Carlo driver, which owns a `sims`-sized buffer and
/// has no further use for the original order.
pub fn quantile_in_place(values: &mut [f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_unstable_by(f64::total_cmp);
    interpolate_sorted(values, q)
}

/// Quantile of an already ascending slice
fn interpolate_sorted(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = q.clamp(0.0, 1.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(last);
    let weight = rank - lo as f64;

    if weight == 0.0 || lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + weight * (sorted[hi] - sorted[lo])
    }
}

//! Student-t fitting by integer grid search over the degrees of freedom
//!
//! The sample is standardized with its own mean and sample standard
//! deviation, then every integer `df` in `[df_min, df_max]` is scored with
//! the unit-scale Student-t log-likelihood. The search is exhaustive and
//! deterministic for a given sample.

use std::f64::consts::PI;

use statrs::function::gamma::ln_gamma;

use super::sample::SampleStatistics;
use crate::config::DF_FALLBACK;

/// Log-likelihood of a standardized sample under a unit-scale Student-t.
///
/// `ll = Σ [lnΓ((df+1)/2) - lnΓ(df/2) - ½·ln(df·π) - (df+1)/2 · ln(1 + x²/df)]`
#[must_use]
pub fn student_t_log_likelihood(x: &[f64], df: f64) -> f64 {
    let norm = ln_gamma((df + 1.0) / 2.0) - ln_gamma(df / 2.0) - 0.5 * (df * PI).ln();
    let half_df1 = (df + 1.0) / 2.0;
    x.iter()
        .map(|xi| norm - half_df1 * (xi * xi / df).ln_1p())
        .sum()
}

/// Fit the Student-t degrees of freedom by maximum likelihood over `df_min..=df_max`.
///
/// Returns [`DF_FALLBACK`] when the sample has no usable spread (constant,
/// fewer than two points, or non-finite standard deviation). Ties keep the
/// smallest `df`.
#[must_use]
pub fn fit_degrees_of_freedom(sample: &[f64], df_min: u32, df_max: u32) -> u32 {
    let Some(stats) = SampleStatistics::from_values(sample).filter(SampleStatistics::has_spread)
    else {
        return DF_FALLBACK;
    };

    let standardized: Vec<f64> = sample
        .iter()
        .map(|r| (r - stats.mean) / stats.std_dev)
        .collect();

    let mut best_df = df_min;
    let mut best_ll = f64::NEG_INFINITY;
    for df in df_min..=df_max {
        let ll = student_t_log_likelihood(&standardized, f64::from(df));
        if ll > best_ll {
            best_ll = ll;
            best_df = df;
        }
    }

    tracing::debug!(
        df = best_df,
        log_likelihood = best_ll,
        observations = sample.len(),
        "fitted Student-t degrees of freedom"
    );
    best_df
}

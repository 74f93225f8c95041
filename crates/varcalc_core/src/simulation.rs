//! Monte Carlo VaR driver
//!
//! Validates the request, fits the chosen path model to the cleaned
//! returns, simulates `sims` horizon outcomes in fixed-size chunks and
//! reads VaR off the loss distribution.

use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};
use rand_distr::{StandardNormal, StudentT};

use crate::config::{DF_FALLBACK, DF_MIN, SimulationLimits};
use crate::error::{Result, VarError};
use crate::model::{Method, VarInput, VarRequest, VarResult};
use crate::stats::{SampleStatistics, fit_degrees_of_freedom, quantile_in_place, z_from_conf};
use crate::validation::validate;

/// Per-period drift used by every parametric model.
///
/// Callers typically centre the series already; a non-zero mean here
/// would shift every simulated path.
const FORCED_MEAN: f64 = 0.0;

/// Estimate VaR for `input` using the default [`SimulationLimits`].
pub fn simulate_var(input: &VarInput) -> Result<VarResult> {
    simulate_var_with_limits(input, &SimulationLimits::default())
}

/// Estimate VaR for `input`, validating against `limits`.
pub fn simulate_var_with_limits(input: &VarInput, limits: &SimulationLimits) -> Result<VarResult> {
    let request = validate(input, limits)?;
    estimate(&request, limits)
}

/// Run the simulation for an already validated request.
pub fn estimate(request: &VarRequest, limits: &SimulationLimits) -> Result<VarResult> {
    let Some(stats) =
        SampleStatistics::from_values(&request.returns).filter(|stats| stats.count >= 2)
    else {
        tracing::debug!(
            observations = request.returns.len(),
            "insufficient finite observations for VaR"
        );
        return Ok(VarResult::insufficient_data());
    };

    let mu = FORCED_MEAN;
    let sigma = if stats.std_dev.is_finite() && stats.std_dev >= 0.0 {
        stats.std_dev
    } else {
        f64::NAN
    };
    let has_spread = sigma > 0.0;

    let mut root = match request.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let (model, df_hat) = match request.method {
        Method::Normal if has_spread => (PathModel::Normal { mu, sigma }, None),
        Method::Normal => (PathModel::PointMass { mu }, None),
        Method::TMc if has_spread => {
            let df = fit_degrees_of_freedom(&request.returns, DF_MIN, request.df_max);
            let df_f = f64::from(df);
            // Match the simulated variance to the sample variance where it exists
            let scale = if df > 2 {
                sigma * ((df_f - 2.0) / df_f).sqrt()
            } else {
                sigma
            };
            let dist = StudentT::new(df_f).map_err(|e| VarError::Distribution {
                distribution: "StudentT",
                reason: e.to_string(),
            })?;
            tracing::debug!(df, scale, sigma, "Student-t path model");
            (PathModel::StudentT { mu, scale, dist }, Some(df))
        }
        Method::TMc => (PathModel::PointMass { mu }, Some(DF_FALLBACK)),
        Method::Bootstrap => (
            PathModel::Bootstrap {
                sample: &request.returns,
            },
            None,
        ),
    };

    let mut outcomes = simulate_paths(&model, request.sims, request.horizon, limits, &mut root);

    // Losses are negated returns
    for outcome in &mut outcomes {
        *outcome = -*outcome;
    }
    let var = quantile_in_place(&mut outcomes, request.conf).max(0.0);

    tracing::info!(
        method = %request.method,
        conf = request.conf,
        horizon = request.horizon,
        sims = request.sims,
        var,
        "VaR estimate complete"
    );

    Ok(match request.method {
        Method::Normal => VarResult::normal(var, mu, sigma),
        Method::TMc => VarResult::student_t(
            var,
            mu,
            sigma,
            df_hat.unwrap_or(DF_FALLBACK),
            z_from_conf(request.conf),
        ),
        Method::Bootstrap => VarResult::bootstrap(var),
    })
}

/// Generator for one simulated horizon outcome per path
#[derive(Debug, Clone)]
enum PathModel<'a> {
    /// Degenerate spread: every path sits at the drift
    PointMass { mu: f64 },
    Normal { mu: f64, sigma: f64 },
    StudentT {
        mu: f64,
        scale: f64,
        dist: StudentT<f64>,
    },
    /// Non-empty sample resampled with replacement
    Bootstrap { sample: &'a [f64] },
}

impl PathModel<'_> {
    /// Write one horizon outcome per element of `out`.
    fn fill<R: Rng>(&self, rng: &mut R, horizon: usize, out: &mut [f64]) {
        let drift = |mu: f64| mu * horizon as f64;
        match self {
            PathModel::PointMass { mu } => out.fill(drift(*mu)),
            PathModel::Normal { mu, sigma } => {
                for path in out.iter_mut() {
                    let sum: f64 = (0..horizon)
                        .map(|_| rng.sample::<f64, _>(StandardNormal))
                        .sum();
                    *path = sigma * sum + drift(*mu);
                }
            }
            PathModel::StudentT { mu, scale, dist } => {
                for path in out.iter_mut() {
                    let sum: f64 = (0..horizon).map(|_| rng.sample::<f64, _>(dist)).sum();
                    *path = scale * sum + drift(*mu);
                }
            }
            PathModel::Bootstrap { sample } => {
                for path in out.iter_mut() {
                    *path = (0..horizon)
                        .map(|_| sample[rng.random_range(0..sample.len())])
                        .sum();
                }
            }
        }
    }
}

/// Simulate `sims` horizon outcomes into a pre-sized buffer, one chunk at a time.
///
/// Each chunk draws from its own generator seeded by `root`, so the
/// output depends only on the root seed and the chunk layout, not on
/// which thread ran which chunk.
fn simulate_paths(
    model: &PathModel<'_>,
    sims: usize,
    horizon: usize,
    limits: &SimulationLimits,
    root: &mut SmallRng,
) -> Vec<f64> {
    let chunk_size = limits.chunk_size(sims, horizon);
    let num_chunks = sims.div_ceil(chunk_size);
    let seeds: Vec<u64> = (0..num_chunks).map(|_| root.next_u64()).collect();

    tracing::debug!(sims, horizon, chunk_size, num_chunks, "simulating paths");

    let mut outcomes = vec![0.0; sims];
    fill_chunks(model, horizon, chunk_size, &seeds, &mut outcomes);
    outcomes
}

#[cfg(feature = "parallel")]
fn fill_chunks(
    model: &PathModel<'_>,
    horizon: usize,
    chunk_size: usize,
    seeds: &[u64],
    outcomes: &mut [f64],
) {
    use rayon::prelude::*;

    outcomes
        .par_chunks_mut(chunk_size)
        .zip(seeds.par_iter())
        .for_each(|(chunk, &seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            model.fill(&mut rng, horizon, chunk);
        });
}

#[cfg(not(feature = "parallel"))]
fn fill_chunks(
    model: &PathModel<'_>,
    horizon: usize,
    chunk_size: usize,
    seeds: &[u64],
    outcomes: &mut [f64],
) {
    fill_chunks_sequential(model, horizon, chunk_size, seeds, outcomes);
}

#[cfg(any(test, not(feature = "parallel")))]
fn fill_chunks_sequential(
    model: &PathModel<'_>,
    horizon: usize,
    chunk_size: usize,
    seeds: &[u64],
    outcomes: &mut [f64],
) {
    for (chunk, &seed) in outcomes.chunks_mut(chunk_size).zip(seeds) {
        let mut rng = SmallRng::seed_from_u64(seed);
        model.fill(&mut rng, horizon, chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits_with_chunk(min_chunk_paths: usize, target_chunk_elements: u64) -> SimulationLimits {
        SimulationLimits {
            min_chunk_paths,
            target_chunk_elements,
            ..SimulationLimits::default()
        }
    }

    #[test]
    fn test_simulate_paths_fills_every_path() {
        let sample = [1.0, 2.0];
        let model = PathModel::Bootstrap { sample: &sample };
        let mut root = SmallRng::seed_from_u64(1);
        // 25 paths in chunks of 10, 10 and 5
        let limits = limits_with_chunk(1, 30);
        let outcomes = simulate_paths(&model, 25, 3, &limits, &mut root);

        assert_eq!(outcomes.len(), 25);
        // Three draws from {1, 2} sum to 3..=6
        assert!(outcomes.iter().all(|o| (3.0..=6.0).contains(o)));
    }

    #[test]
    fn test_point_mass_is_drift() {
        let model = PathModel::PointMass { mu: 0.0 };
        let mut root = SmallRng::seed_from_u64(1);
        let outcomes = simulate_paths(&model, 100, 5, &SimulationLimits::default(), &mut root);
        assert!(outcomes.iter().all(|&o| o == 0.0));
    }

    #[test]
    fn test_same_seeds_same_outcomes() {
        let model = PathModel::Normal {
            mu: 0.0,
            sigma: 0.01,
        };
        let limits = limits_with_chunk(7, 70);
        let a = simulate_paths(&model, 50, 4, &limits, &mut SmallRng::seed_from_u64(5));
        let b = simulate_paths(&model, 50, 4, &limits, &mut SmallRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_chunk_scheduling_does_not_change_outcomes() {
        let sample = [0.01, -0.02, 0.015, -0.005];
        let dist = StudentT::new(4.0).unwrap();
        let models = [
            PathModel::Normal {
                mu: 0.0,
                sigma: 0.01,
            },
            PathModel::StudentT {
                mu: 0.0,
                scale: 0.01,
                dist,
            },
            PathModel::Bootstrap { sample: &sample },
        ];
        // 1_000 paths in chunks of 64, the last one partial
        let seeds: Vec<u64> = (0..16).map(|i| 1_000 + i).collect();

        for model in &models {
            let mut scheduled = vec![0.0; 1_000];
            fill_chunks(model, 3, 64, &seeds, &mut scheduled);
            let mut in_order = vec![0.0; 1_000];
            fill_chunks_sequential(model, 3, 64, &seeds, &mut in_order);
            assert_eq!(scheduled, in_order, "{model:?}");
        }
    }

    #[test]
    fn test_normal_paths_scale_with_horizon() {
        let model = PathModel::Normal {
            mu: 0.0,
            sigma: 0.02,
        };
        let mut root = SmallRng::seed_from_u64(9);
        let outcomes = simulate_paths(&model, 40_000, 4, &SimulationLimits::default(), &mut root);

        let n = outcomes.len() as f64;
        let mean = outcomes.iter().sum::<f64>() / n;
        let var = outcomes.iter().map(|o| (o - mean).powi(2)).sum::<f64>() / (n - 1.0);
        // Variance of a 4-period sum is 4 * sigma^2
        let expected = 4.0 * 0.02_f64.powi(2);
        assert!(
            (var - expected).abs() / expected < 0.05,
            "variance {var} vs {expected}"
        );
    }

    #[test]
    fn test_student_t_paths_match_sample_variance() {
        let df = 6.0_f64;
        let sigma = 0.015;
        let model = PathModel::StudentT {
            mu: 0.0,
            scale: sigma * ((df - 2.0) / df).sqrt(),
            dist: StudentT::new(df).unwrap(),
        };
        let mut root = SmallRng::seed_from_u64(21);
        let outcomes = simulate_paths(&model, 200_000, 1, &SimulationLimits::default(), &mut root);

        let n = outcomes.len() as f64;
        let mean = outcomes.iter().sum::<f64>() / n;
        let var = outcomes.iter().map(|o| (o - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert!(
            (var.sqrt() - sigma).abs() / sigma < 0.05,
            "std {} vs {sigma}",
            var.sqrt()
        );
    }
}

//! Engine configuration
//!
//! `SimulationLimits` holds the ceilings that keep a single estimate's
//! latency and memory bounded, plus the chunking policy used by the
//! Monte Carlo driver. Every field has a default so a partial YAML/JSON
//! document deserializes cleanly.

use serde::{Deserialize, Serialize};

/// Lower bound of the degrees-of-freedom grid search
pub const DF_MIN: u32 = 3;

/// Degrees of freedom reported when the sample has no usable spread
pub const DF_FALLBACK: u32 = 5;

/// Upper bound of the degrees-of-freedom grid search when the request omits one
pub const DEFAULT_DF_MAX: u32 = 60;

fn default_max_sims() -> u64 {
    2_000_000
}

fn default_max_horizon() -> u64 {
    2_500
}

fn default_max_sim_elements() -> u64 {
    60_000_000
}

fn default_target_chunk_elements() -> u64 {
    5_000_000
}

fn default_min_chunk_paths() -> usize {
    10_000
}

/// Validation ceilings and chunk policy for the Monte Carlo driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationLimits {
    /// Maximum number of simulated paths per request
    #[serde(default = "default_max_sims")]
    pub max_sims: u64,
    /// Maximum horizon length in periods
    #[serde(default = "default_max_horizon")]
    pub max_horizon: u64,
    /// Maximum `sims * T` scalar draws per request
    #[serde(default = "default_max_sim_elements")]
    pub max_sim_elements: u64,
    /// Scalar draws targeted per chunk (~40 MB of f64)
    #[serde(default = "default_target_chunk_elements")]
    pub target_chunk_elements: u64,
    /// Chunks never shrink below this many paths
    #[serde(default = "default_min_chunk_paths")]
    pub min_chunk_paths: usize,
}

impl Default for SimulationLimits {
    fn default() -> Self {
        Self {
            max_sims: default_max_sims(),
            max_horizon: default_max_horizon(),
            max_sim_elements: default_max_sim_elements(),
            target_chunk_elements: default_target_chunk_elements(),
            min_chunk_paths: default_min_chunk_paths(),
        }
    }
}

impl SimulationLimits {
    /// Paths generated per chunk for a request of `sims` paths over `horizon` periods.
    ///
    /// `max(min_chunk_paths, min(sims, target_chunk_elements / horizon))`. The
    /// final chunk is clipped by the caller to the remaining path count.
    #[must_use]
    pub fn chunk_size(&self, sims: usize, horizon: usize) -> usize {
        let per_chunk = self.target_chunk_elements / horizon.max(1) as u64;
        let per_chunk = usize::try_from(per_chunk).unwrap_or(usize::MAX);
        sims.min(per_chunk).max(self.min_chunk_paths).max(1)
    }
}

//! Request validation
//!
//! Checks run in a fixed order and stop at the first violation, so a
//! request is rejected before any simulation work begins.

use crate::config::{DF_MIN, SimulationLimits};
use crate::error::{Result, VarError};
use crate::model::{Method, VarInput, VarRequest};
use crate::stats::clean_returns;

/// Validate `input` against `limits` and clean its return series.
///
/// Order of checks: `conf`, `T >= 1`, `sims >= 1`, `sims` ceiling, `T`
/// ceiling, `sims * T` ceiling, `method`, `df_max`.
pub fn validate(input: &VarInput, limits: &SimulationLimits) -> Result<VarRequest> {
    if !(input.conf > 0.0 && input.conf < 1.0) {
        return Err(VarError::InvalidConfidence(input.conf));
    }
    if input.horizon < 1 {
        return Err(VarError::HorizonTooShort(input.horizon));
    }
    if input.sims < 1 {
        return Err(VarError::TooFewSimulations(input.sims));
    }

    // Both are positive from here on
    let sims = input.sims.unsigned_abs();
    let horizon = input.horizon.unsigned_abs();

    if sims > limits.max_sims {
        return Err(VarError::TooManySimulations {
            sims: input.sims,
            max: limits.max_sims,
        });
    }
    if horizon > limits.max_horizon {
        return Err(VarError::HorizonTooLong {
            horizon: input.horizon,
            max: limits.max_horizon,
        });
    }
    let elements = sims.saturating_mul(horizon);
    if elements > limits.max_sim_elements {
        return Err(VarError::WorkloadTooLarge {
            elements,
            max: limits.max_sim_elements,
        });
    }

    let method: Method = input.method.parse()?;

    if input.df_max < i64::from(DF_MIN) {
        return Err(VarError::DfMaxTooSmall {
            df_max: input.df_max,
            min: DF_MIN,
        });
    }

    Ok(VarRequest {
        returns: clean_returns(&input.returns),
        conf: input.conf,
        horizon: to_usize(horizon),
        sims: to_usize(sims),
        method,
        df_max: u32::try_from(input.df_max).unwrap_or(u32::MAX),
        seed: input.seed,
    })
}

/// Values here are already bounded by the configured ceilings
fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

//! Monte Carlo Value-at-Risk engine
//!
//! This crate estimates the Value-at-Risk of a return series by simulating
//! aggregate horizon returns under one of three models:
//! - `normal` - Gaussian paths scaled by the sample standard deviation
//! - `t_mc` - Student-t paths with a maximum-likelihood fitted `df`
//! - `bootstrap` - non-parametric resampling of the observed returns
//!
//! VaR is reported as the `conf`-quantile of the simulated loss
//! distribution, floored at zero.
//!
//! ```ignore
//! use varcalc_core::{Method, VarInput, simulate_var};
//!
//! let input = VarInput::new(vec![0.01, -0.02, 0.015, -0.005], 0.99, 10, 100_000, Method::TMc);
//! let result = simulate_var(&input)?;
//! println!("10-day 99% VaR: {:.4}", result.var);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod error;
pub mod simulation;
pub mod stats;
pub mod validation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::SimulationLimits;
pub use error::{Result, VarError};
pub use model::{Method, VarInput, VarRequest, VarResult};
pub use simulation::{simulate_var, simulate_var_with_limits};
pub use stats::{fit_degrees_of_freedom, quantile, student_t_log_likelihood, z_from_conf};

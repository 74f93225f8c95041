use serde::Serialize;

/// Outcome of a VaR estimate.
///
/// Which optional fields are present depends on the method:
/// - `bootstrap`: `var` only
/// - `normal`: `var`, `mu`, `sigma`
/// - `t_mc`: `var`, `mu`, `sigma`, `nu`, `z`
///
/// `var` is a non-negative loss magnitude, or `NaN` when fewer than two
/// finite observations were supplied (in which case nothing else is set).
/// `NaN` serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarResult {
    pub var: f64,
    /// Per-period drift used by the simulation (always zero)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mu: Option<f64>,
    /// Sample standard deviation of the cleaned returns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
    /// Fitted Student-t degrees of freedom
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nu: Option<u32>,
    /// Standard-normal quantile of `conf`, for reporting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl VarResult {
    /// Result for a series with fewer than two finite observations
    #[must_use]
    pub fn insufficient_data() -> Self {
        Self::bootstrap(f64::NAN)
    }

    #[must_use]
    pub fn bootstrap(var: f64) -> Self {
        Self {
            var,
            mu: None,
            sigma: None,
            nu: None,
            z: None,
        }
    }

    #[must_use]
    pub fn normal(var: f64, mu: f64, sigma: f64) -> Self {
        Self {
            mu: Some(mu),
            sigma: Some(sigma),
            ..Self::bootstrap(var)
        }
    }

    #[must_use]
    pub fn student_t(var: f64, mu: f64, sigma: f64, nu: u32, z: f64) -> Self {
        Self {
            nu: Some(nu),
            z: Some(z),
            ..Self::normal(var, mu, sigma)
        }
    }

    /// True when the estimate could not be computed for lack of data
    #[must_use]
    pub fn is_insufficient(&self) -> bool {
        self.var.is_nan()
    }
}

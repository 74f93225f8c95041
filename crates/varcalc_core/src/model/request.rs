use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::DEFAULT_DF_MAX;
use crate::error::VarError;

/// Simulation model used to generate horizon returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Gaussian per-period returns scaled by the sample standard deviation
    Normal,
    /// Student-t per-period returns with fitted degrees of freedom
    TMc,
    /// Resampling with replacement from the observed returns
    Bootstrap,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Normal, Method::TMc, Method::Bootstrap];

    /// Wire name of the method
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Normal => "normal",
            Method::TMc => "t_mc",
            Method::Bootstrap => "bootstrap",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = VarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| VarError::UnknownMethod(s.to_string()))
    }
}

fn default_df_max() -> i64 {
    i64::from(DEFAULT_DF_MAX)
}

/// Integer count that also accepts a JSON float, truncated toward zero.
fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(i64),
        Float(f64),
    }

    match Count::deserialize(deserializer)? {
        Count::Int(n) => Ok(n),
        Count::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
        Count::Float(f) => Err(serde::de::Error::custom(format!(
            "expected a finite number, got {f}"
        ))),
    }
}

/// Missing observations (`null`) become `NaN` and are dropped with the other non-finite values.
fn deserialize_returns<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|r| r.unwrap_or(f64::NAN)).collect())
}

/// Unvalidated VaR request, as received from a caller.
///
/// Integer fields are signed and `method` is free text so that every
/// out-of-range value reaches validation and is reported with the
/// violated constraint rather than as a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarInput {
    /// Periodic returns; non-finite entries are ignored
    #[serde(rename = "r", default, deserialize_with = "deserialize_returns")]
    pub returns: Vec<f64>,
    /// Confidence level in (0, 1)
    pub conf: f64,
    /// Number of periods summed into one simulated outcome
    #[serde(rename = "T", deserialize_with = "deserialize_count")]
    pub horizon: i64,
    /// Number of simulated paths
    #[serde(deserialize_with = "deserialize_count")]
    pub sims: i64,
    pub method: String,
    /// Upper bound of the degrees-of-freedom search (`t_mc` only)
    #[serde(
        rename = "dfMax",
        alias = "df_max",
        default = "default_df_max",
        deserialize_with = "deserialize_count"
    )]
    pub df_max: i64,
    /// Fixed seed for a reproducible run; OS entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl VarInput {
    #[must_use]
    pub fn new(returns: Vec<f64>, conf: f64, horizon: i64, sims: i64, method: Method) -> Self {
        Self {
            returns,
            conf,
            horizon,
            sims,
            method: method.as_str().to_string(),
            df_max: i64::from(DEFAULT_DF_MAX),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_df_max(mut self, df_max: i64) -> Self {
        self.df_max = df_max;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A request that passed validation, holding the cleaned return series.
///
/// Build one with [`crate::validation::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct VarRequest {
    /// Finite observations only
    pub returns: Vec<f64>,
    pub conf: f64,
    pub horizon: usize,
    pub sims: usize,
    pub method: Method,
    pub df_max: u32,
    pub seed: Option<u64>,
}

use thiserror::Error;

/// Errors returned by the VaR engine.
///
/// Every validation variant renders a message naming the violated
/// constraint and, for ceilings, the configured limit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VarError {
    #[error("conf must be in (0, 1)")]
    InvalidConfidence(f64),

    #[error("T must be >= 1")]
    HorizonTooShort(i64),

    #[error("sims must be >= 1")]
    TooFewSimulations(i64),

    #[error("sims too large (max={max})")]
    TooManySimulations { sims: i64, max: u64 },

    #[error("T too large (max={max})")]
    HorizonTooLong { horizon: i64, max: u64 },

    #[error("sims*T too large (max={max})")]
    WorkloadTooLarge { elements: u64, max: u64 },

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("dfMax must be >= {min}")]
    DfMaxTooSmall { df_max: i64, min: u32 },

    /// A sampling distribution rejected its parameters
    #[error("invalid {distribution} parameters: {reason}")]
    Distribution {
        distribution: &'static str,
        reason: String,
    },
}

impl VarError {
    /// True for errors raised before any simulation work begins.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, VarError::Distribution { .. })
    }
}

pub type Result<T> = std::result::Result<T, VarError>;

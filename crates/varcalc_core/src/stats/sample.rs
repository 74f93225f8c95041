//! Return-series cleaning and summary statistics

/// Drop non-finite observations (`NaN`, `±inf`), keeping the rest in order.
#[must_use]
pub fn clean_returns(returns: &[f64]) -> Vec<f64> {
    returns.iter().copied().filter(|r| r.is_finite()).collect()
}

/// Mean and sample standard deviation of a return series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics {
    /// Number of observations
    pub count: usize,
    pub mean: f64,
    /// Standard deviation with the `n - 1` divisor (`NaN` below two observations)
    pub std_dev: f64,
}

impl SampleStatistics {
    /// Compute statistics for `values`. Returns `None` for an empty slice.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let first = values[0];
        let is_constant = values.iter().all(|&v| v == first);
        // A running sum of a repeated value need not divide back to that value
        let mean = if is_constant {
            first
        } else {
            values.iter().sum::<f64>() / n
        };

        let std_dev = if values.len() < 2 {
            f64::NAN
        } else if is_constant {
            0.0
        } else {
            let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        };

        Some(Self {
            count: values.len(),
            mean,
            std_dev,
        })
    }

    /// True when the standard deviation is finite and strictly positive.
    #[must_use]
    pub fn has_spread(&self) -> bool {
        self.std_dev.is_finite() && self.std_dev > 0.0
    }
}

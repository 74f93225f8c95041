//! Statistical building blocks for the VaR engine
//!
//! - `normal` - confidence level to standard-normal z-score
//! - `student_t` - Student-t log-likelihood and degrees-of-freedom fit
//! - `quantile` - linear-interpolation empirical quantiles
//! - `sample` - return-series cleaning and summary statistics

pub mod normal;
pub mod quantile;
pub mod sample;
pub mod student_t;

pub use normal::z_from_conf;
pub use quantile::{quantile, quantile_in_place};
pub use sample::{SampleStatistics, clean_returns};
pub use student_t::{fit_degrees_of_freedom, student_t_log_likelihood};

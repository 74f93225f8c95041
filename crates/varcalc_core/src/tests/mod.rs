//! Scenario tests for the VaR engine
//!
//! Tests are organized by topic:
//! - `methods` - end-to-end estimates and result shapes per method
//! - `degenerate` - insufficient data and zero-spread fallbacks
//! - `chunking` - seeding and chunk-layout behaviour of the driver

mod degenerate;

/// Small mixed-sign return series used across scenarios
pub(crate) const SAMPLE_RETURNS: [f64; 6] = [0.01, -0.02, 0.015, -0.005, 0.02, -0.01];

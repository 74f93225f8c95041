//! Command-line front end for the varcalc engine
//!
//! Reads a VaR request as JSON, runs it through `varcalc_core` and renders
//! the `{"ok": ...}` response envelope.

pub mod io;
pub mod logging;
pub mod response;

pub use io::{load_limits, parse_input, read_input};
pub use logging::init_logging;
pub use response::Response;

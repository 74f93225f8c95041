//! Loading requests and engine limits from disk or stdin

use std::io::Read;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use varcalc_core::{SimulationLimits, VarInput};

/// Parse a JSON request body.
pub fn parse_input(json: &str) -> serde_json::Result<VarInput> {
    serde_json::from_str(json)
}

/// Read a request from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> color_eyre::Result<VarInput> {
    let body = match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read request {}", path.display()))?,
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .wrap_err("failed to read request from stdin")?;
            body
        }
    };

    parse_input(&body).wrap_err("request is not a valid VaR input")
}

/// Load [`SimulationLimits`] from a YAML file. Omitted fields keep their defaults.
pub fn load_limits(path: &Path) -> color_eyre::Result<SimulationLimits> {
    let yaml = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read limits {}", path.display()))?;
    let limits = serde_saphyr::from_str(&yaml)
        .wrap_err_with(|| format!("invalid limits file {}", path.display()))?;
    tracing::debug!(?limits, "loaded simulation limits");
    Ok(limits)
}

use std::path::PathBuf;

use clap::Parser;
use varcalc::{Response, init_logging, load_limits, read_input};
use varcalc_core::{SimulationLimits, simulate_var_with_limits};

#[derive(Parser, Debug)]
#[command(name = "varcalc")]
#[command(about = "Monte Carlo Value-at-Risk for a return series")]
struct Args {
    /// Request JSON file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// YAML file overriding the simulation limits
    #[arg(long)]
    limits: Option<PathBuf>,

    /// Seed for a reproducible run (overrides any seed in the request)
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.log_file.as_deref(), &args.log_level)?;

    let limits = match &args.limits {
        Some(path) => load_limits(path)?,
        None => SimulationLimits::default(),
    };

    let mut input = read_input(args.input.as_deref())?;
    if let Some(seed) = args.seed {
        input.seed = Some(seed);
    }

    tracing::info!(
        method = %input.method,
        observations = input.returns.len(),
        conf = input.conf,
        horizon = input.horizon,
        sims = input.sims,
        "Starting VaR estimate"
    );

    let outcome = simulate_var_with_limits(&input, &limits);
    match &outcome {
        Err(e) if e.is_validation() => tracing::warn!(error = %e, "VaR request rejected"),
        Err(e) => tracing::error!(error = %e, "VaR simulation failed"),
        Ok(_) => {}
    }

    let response = Response::from(outcome);
    println!("{}", response.to_json(args.pretty)?);

    if !response.is_ok() {
        std::process::exit(1);
    }
    Ok(())
}

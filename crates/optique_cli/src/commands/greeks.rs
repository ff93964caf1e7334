//! Greeks command implementation
//!
//! Computes the five analytical sensitivities for one parameter set. The
//! values are call-convention: put callers apply the parity adjustments
//! themselves.

use tracing::info;

use optique_models::analytical::BlackScholes;
use optique_models::instruments::OptionParams;

use crate::{CliError, Result};

/// Run the greeks command
pub fn run(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64, format: &str) -> Result<()> {
    info!("Computing Greeks...");
    info!(
        "  S = {}, K = {}, T = {}, r = {}, vol = {}",
        spot, strike, expiry, rate, vol
    );

    let params = OptionParams::new(spot, strike, expiry, rate, vol)?;
    let greeks = BlackScholes::new(params).greeks();

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&greeks)?);
        }
        "table" => {
            println!("┌────────────┬────────────┐");
            println!("│ Greek      │ Value      │");
            println!("├────────────┼────────────┤");
            println!("│ {:<10} │ {:>10.4} │", "delta", greeks.delta);
            println!("│ {:<10} │ {:>10.4} │", "gamma", greeks.gamma);
            println!("│ {:<10} │ {:>10.4} │", "vega", greeks.vega);
            println!("│ {:<10} │ {:>10.4} │", "theta", greeks.theta);
            println!("│ {:<10} │ {:>10.4} │", "rho", greeks.rho);
            println!("└────────────┴────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Greeks complete");
    Ok(())
}

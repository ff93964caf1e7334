//! Price command implementation
//!
//! Prices a single European option with the optique_models engine.

use tracing::info;

use optique_models::analytical::BlackScholes;
use optique_models::instruments::{OptionParams, OptionType};

use crate::{CliError, Result};

/// Run the price command
pub fn run(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
    option_type: &str,
    format: &str,
) -> Result<()> {
    info!("Pricing European option...");
    info!(
        "  S = {}, K = {}, T = {}, r = {}, vol = {}",
        spot, strike, expiry, rate, vol
    );

    // Label normalisation lives in the boundary parser, not here
    let option_type: OptionType = option_type.parse()?;
    let params = OptionParams::new(spot, strike, expiry, rate, vol)?;
    let price = BlackScholes::new(params).price(option_type);

    match format {
        "json" => {
            let payload = serde_json::json!({
                "spot": spot,
                "strike": strike,
                "expiry": expiry,
                "rate": rate,
                "vol": vol,
                "option_type": option_type,
                "price": price,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "table" => {
            println!("┌──────────────┬────────────┐");
            println!("│ {:<12} │ {:>10.4} │", format!("{option_type} price"), price);
            println!("└──────────────┴────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Pricing complete");
    Ok(())
}

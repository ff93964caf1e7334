//! Optique CLI - Command Line Operations for Option Analytics
//!
//! This is the operational entry point for the optique pricing library.
//!
//! # Commands
//!
//! - `optique price --spot 100 --strike 100 --expiry 1 --rate 0.05 --vol 0.2 --option-type call`
//! - `optique greeks --spot 100 --strike 100 --expiry 1 --rate 0.05 --vol 0.2`
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate owns all I/O, logging,
//! and label handling; the engine crates below it stay pure. The option-type
//! label is forwarded verbatim to the boundary parser, which matches it
//! case-insensitively.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Optique option analytics CLI
#[derive(Parser)]
#[command(name = "optique")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option
    Price {
        /// Spot price of the underlying
        #[arg(short, long)]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(short = 't', long)]
        expiry: f64,

        /// Continuously compounded risk-free rate
        #[arg(short, long, default_value = "0.05")]
        rate: f64,

        /// Annualised volatility
        #[arg(long)]
        vol: f64,

        /// Option type label ("call" or "put", any case)
        #[arg(short, long, default_value = "call")]
        option_type: String,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Compute the five Greeks (call convention)
    Greeks {
        /// Spot price of the underlying
        #[arg(short, long)]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(short = 't', long)]
        expiry: f64,

        /// Continuously compounded risk-free rate
        #[arg(short, long, default_value = "0.05")]
        rate: f64,

        /// Annualised volatility
        #[arg(long)]
        vol: f64,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            strike,
            expiry,
            rate,
            vol,
            option_type,
            format,
        } => commands::price::run(spot, strike, expiry, rate, vol, &option_type, &format),
        Commands::Greeks {
            spot,
            strike,
            expiry,
            rate,
            vol,
            format,
        } => commands::greeks::run(spot, strike, expiry, rate, vol, &format),
    }
}

//! CLI error types.

use optique_core::types::PricingError;
use thiserror::Error;

/// Convenience type alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line interface.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument was structurally valid for clap but unusable here.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine rejected the inputs.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Output serialisation failed.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

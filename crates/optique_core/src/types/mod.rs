//! Shared types for the optique workspace.
//!
//! This module provides:
//! - `error`: The `PricingError` taxonomy

pub mod error;

pub use error::PricingError;

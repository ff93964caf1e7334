//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing and Greeks operations
//!
//! The engine performs no internal recovery: every invalid input is surfaced
//! immediately to the caller, never clamped or defaulted.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with the
/// offending value attached to each failure mode.
///
/// # Variants
/// - `InvalidParameter`: A market or contract parameter is non-positive
/// - `UnknownOptionType`: The option-type label matched neither accepted value
///
/// # Examples
/// ```
/// use optique_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter { name: "volatility", value: -0.2 };
/// assert_eq!(format!("{}", err), "Invalid parameter: volatility = -0.2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PricingError {
    /// A parameter that must be strictly positive was not.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Which parameter failed validation (e.g. "spot", "volatility")
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The option-type label matched neither "call" nor "put" after case
    /// normalisation.
    #[error("Unknown option type: {label}")]
    UnknownOptionType {
        /// The rejected label, as supplied by the caller
        label: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::InvalidParameter {
            name: "spot",
            value: -100.0,
        };
        assert_eq!(format!("{}", err), "Invalid parameter: spot = -100");
    }

    #[test]
    fn test_unknown_option_type_display() {
        let err = PricingError::UnknownOptionType {
            label: "straddle".to_string(),
        };
        assert_eq!(format!("{}", err), "Unknown option type: straddle");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidParameter {
            name: "strike",
            value: 0.0,
        };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::UnknownOptionType {
            label: "swap".to_string(),
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingError>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialises_with_offending_value() {
        let err = PricingError::InvalidParameter {
            name: "expiry",
            value: -1.0,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["InvalidParameter"]["name"], "expiry");
        assert_eq!(json["InvalidParameter"]["value"], -1.0);
    }
}

//! Option type discriminator.
//!
//! This module provides the closed two-variant `OptionType` enumeration and
//! its case-insensitive string parsing. Raw labels are normalised here, at
//! the boundary; the pricing engine itself only ever sees the enum.

use std::fmt;
use std::str::FromStr;

use optique_core::types::PricingError;

/// Type of a European option: call or put.
///
/// Parsing accepts "call" and "put" in any ASCII case ("Call", "CALL", ...),
/// matching the labels a front-end passes through. Anything else fails with
/// [`PricingError::UnknownOptionType`].
///
/// # Examples
/// ```
/// use optique_models::instruments::OptionType;
///
/// let parsed: OptionType = "Call".parse().unwrap();
/// assert_eq!(parsed, OptionType::Call);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike price.
    Call,
    /// Right to sell at the strike price.
    Put,
}

impl OptionType {
    /// Returns true for the call variant.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label.eq_ignore_ascii_case("call") {
            Ok(OptionType::Call)
        } else if label.eq_ignore_ascii_case("put") {
            Ok(OptionType::Put)
        } else {
            Err(PricingError::UnknownOptionType {
                label: label.to_string(),
            })
        }
    }
}

//! European option contract definitions.
//!
//! This module provides:
//! - `OptionType`: call/put discriminator with case-insensitive parsing
//! - `OptionParams`: validated market and contract parameters

pub mod option_type;
pub mod params;

pub use option_type::OptionType;
pub use params::OptionParams;

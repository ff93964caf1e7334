//! Mathematical primitives for option pricing.
//!
//! This module provides:
//! - `normal`: Standard normal distribution functions (CDF, PDF)

pub mod normal;

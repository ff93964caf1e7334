//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions under Black-Scholes dynamics:
//! - `black_scholes`: call and put prices
//! - `greeks`: the five analytical sensitivities (Delta, Gamma, Vega, Theta,
//!   Rho)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: supports `f64` and `f32`
//! - **Numerical Stability**: Φ is evaluated through a vetted erf
//!   approximation, stable in the tails
//! - **No hidden state**: d1/d2 are recomputed on every call

pub mod black_scholes;
pub mod greeks;

pub use black_scholes::BlackScholes;
pub use greeks::Greeks;

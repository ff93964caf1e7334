//! Analytical Greeks for European options.
//!
//! ## Mathematical Formulas
//!
//! - Delta = Φ(d₁)
//! - Gamma = φ(d₁) / (S·σ·√T)
//! - Vega = S·φ(d₁)·√T
//! - Theta = -(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·Φ(d₂)
//! - Rho = K·T·e^(-rT)·Φ(d₂)
//!
//! Gamma and vega are identical for calls and puts. Delta, theta, and rho
//! are reported in the call convention regardless of the leg being priced;
//! callers needing the put side apply the parity adjustments themselves
//! (e.g. put delta = call delta - 1).
//!
//! Unit conventions: vega and rho are raw sensitivities (not divided by 100),
//! theta is an annualised rate (not per-day).

use num_traits::Float;

use optique_core::math::normal::{norm_cdf, norm_pdf};

use super::black_scholes::BlackScholes;

/// The five first- and second-order sensitivities of an option price.
///
/// Produced by [`BlackScholes::greeks`]. Plain data: fields are public and
/// the struct carries no behaviour.
///
/// # Examples
/// ```
/// use optique_models::analytical::BlackScholes;
/// use optique_models::instruments::OptionParams;
///
/// let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let greeks = BlackScholes::new(params).greeks();
/// assert!(greeks.gamma > 0.0);
/// assert!(greeks.vega > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Sensitivity of price to spot (∂V/∂S), call convention.
    pub delta: T,
    /// Sensitivity of delta to spot (∂²V/∂S²); identical for calls and puts.
    pub gamma: T,
    /// Sensitivity of price to volatility (∂V/∂σ); identical for calls and
    /// puts. Raw units.
    pub vega: T,
    /// Time decay (∂V/∂t), call convention, annualised.
    pub theta: T,
    /// Sensitivity of price to the risk-free rate (∂V/∂r), call convention.
    /// Raw units.
    pub rho: T,
}

impl<T: Float> BlackScholes<T> {
    /// Computes the five analytical Greeks.
    ///
    /// Recomputes d₁ and d₂ internally from the wrapped parameters; nothing
    /// is shared with the pricing methods beyond the formulas themselves.
    ///
    /// # Examples
    /// ```
    /// use optique_models::analytical::BlackScholes;
    /// use optique_models::instruments::OptionParams;
    ///
    /// let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.05).unwrap();
    /// let greeks = BlackScholes::new(params).greeks();
    /// assert!((greeks.delta - 0.8473).abs() < 1e-3);
    /// ```
    pub fn greeks(&self) -> Greeks<T> {
        let two = T::from(2.0).unwrap();
        let p = self.params();

        let d1 = self.d1();
        let d2 = self.d2();
        let sqrt_t = p.expiry().sqrt();
        let discount = self.discount();

        let pdf_d1 = norm_pdf(d1);
        let cdf_d2 = norm_cdf(d2);

        let delta = norm_cdf(d1);
        let gamma = pdf_d1 / (p.spot() * p.volatility() * sqrt_t);
        let vega = p.spot() * pdf_d1 * sqrt_t;
        let theta = -(p.spot() * pdf_d1 * p.volatility()) / (two * sqrt_t)
            - p.rate() * p.strike() * discount * cdf_d2;
        let rho = p.strike() * p.expiry() * discount * cdf_d2;

        Greeks {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }
}

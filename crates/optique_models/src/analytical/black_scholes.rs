//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put Price**: P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The engine holds a validated [`OptionParams`], so the formulas are
//! evaluated without guard branches: division by σ√T is safe because
//! construction already rejected σ ≤ 0 and T ≤ 0.

use num_traits::Float;

use optique_core::math::normal::norm_cdf;

use crate::instruments::{OptionParams, OptionType};

/// Black-Scholes engine for European option pricing.
///
/// Wraps one immutable parameter set and exposes closed-form prices and
/// Greeks. Every method is a pure function of the wrapped parameters: there
/// is no caching and no interior mutability, so values may be priced from
/// any number of threads concurrently.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use optique_models::analytical::BlackScholes;
/// use optique_models::instruments::{OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let engine = BlackScholes::new(params);
///
/// let call = engine.price(OptionType::Call);
/// let put = engine.price(OptionType::Put);
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let forward = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((call - put - forward).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    params: OptionParams<T>,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a pricing engine from validated parameters.
    ///
    /// Validation lives in [`OptionParams::new`]; by the time an engine
    /// exists, all domain constraints hold.
    pub fn new(params: OptionParams<T>) -> Self {
        Self { params }
    }

    /// Returns the wrapped parameters.
    #[inline]
    pub fn params(&self) -> &OptionParams<T> {
        &self.params
    }

    /// Computes the d₁ term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> T {
        let half = T::from(0.5).unwrap();
        let p = &self.params;

        let vol_sqrt_t = p.volatility() * p.expiry().sqrt();
        let log_moneyness = (p.spot() / p.strike()).ln();
        let drift = (p.rate() + half * p.volatility() * p.volatility()) * p.expiry();

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d₂ term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> T {
        self.d1() - self.params.volatility() * self.params.expiry().sqrt()
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub(crate) fn discount(&self) -> T {
        (-self.params.rate() * self.params.expiry()).exp()
    }

    /// Computes the European call price.
    ///
    /// C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
    ///
    /// # Examples
    /// ```
    /// use optique_models::analytical::BlackScholes;
    /// use optique_models::instruments::OptionParams;
    ///
    /// let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
    /// let price = BlackScholes::new(params).price_call();
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_call(&self) -> T {
        let p = &self.params;
        p.spot() * norm_cdf(self.d1()) - p.strike() * self.discount() * norm_cdf(self.d2())
    }

    /// Computes the European put price.
    ///
    /// P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
    ///
    /// # Examples
    /// ```
    /// use optique_models::analytical::BlackScholes;
    /// use optique_models::instruments::OptionParams;
    ///
    /// let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
    /// let price = BlackScholes::new(params).price_put();
    /// assert!((price - 5.5735).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_put(&self) -> T {
        let p = &self.params;
        p.strike() * self.discount() * norm_cdf(-self.d2()) - p.spot() * norm_cdf(-self.d1())
    }

    /// Computes the price of the given option type.
    #[inline]
    pub fn price(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.price_call(),
            OptionType::Put => self.price_put(),
        }
    }
}

//! Market and contract parameters.
//!
//! This module provides the single immutable parameter value the pricing
//! engine consumes, with validation at construction.

use num_traits::Float;
use optique_core::types::PricingError;

/// Market and contract parameters for a European option.
///
/// Holds spot S, strike K, time to expiry T (in years), the continuously
/// compounded risk-free rate r, and annualised volatility σ. Construction
/// enforces S > 0, K > 0, T > 0, σ > 0; the rate may be any real number
/// (negative rates are valid). Once constructed the value is immutable, so
/// every downstream computation is a pure function of it.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use optique_models::instruments::OptionParams;
///
/// let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert_eq!(params.spot(), 100.0);
/// assert_eq!(params.volatility(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParams<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
}

impl<T: Float> OptionParams<T> {
    /// Creates new option parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to expiry T in years (must be positive)
    /// * `rate` - Continuously compounded risk-free rate r (any real)
    /// * `volatility` - Annualised volatility σ (must be positive)
    ///
    /// # Errors
    /// [`PricingError::InvalidParameter`] naming the first non-positive
    /// parameter. The engine never substitutes defaults: d1 and d2 are
    /// undefined when S, K, T, or σ is not strictly positive, so invalid
    /// inputs are rejected here rather than clamped downstream.
    ///
    /// # Examples
    /// ```
    /// use optique_models::instruments::OptionParams;
    ///
    /// assert!(OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).is_ok());
    /// assert!(OptionParams::new(100.0_f64, 100.0, 0.0, 0.05, 0.2).is_err());
    /// ```
    pub fn new(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> Result<Self, PricingError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(PricingError::InvalidParameter {
                name: "spot",
                value: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if strike <= zero {
            return Err(PricingError::InvalidParameter {
                name: "strike",
                value: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry <= zero {
            return Err(PricingError::InvalidParameter {
                name: "expiry",
                value: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero {
            return Err(PricingError::InvalidParameter {
                name: "volatility",
                value: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }
}

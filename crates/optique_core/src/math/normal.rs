//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ(x)
//! - `norm_pdf`: Probability density function φ(x)
//!
//! Both functions are generic over `T: Float` so the pricing engines can run
//! on `f64` or `f32` without duplication.
//!
//! Φ is computed through the error-function identity
//! Φ(x) = (1 + erf(x/√2)) / 2, with erf evaluated by the Abramowitz & Stegun
//! rational approximation 7.1.26 (maximum absolute error 1.5e-7). The
//! approximation is evaluated on |x| and the sign restored through the odd
//! symmetry of erf, so Φ(x) + Φ(-x) = 1 holds exactly in floating point.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Error function approximation (Abramowitz & Stegun 7.1.26).
///
/// erf(x) = 1 - poly(t)·e^(-x²) with t = 1/(1 + p·x), evaluated on |x| with
/// the sign restored afterwards. Maximum absolute error 1.5e-7 for all x.
#[inline]
fn erf_approx<T: Float>(x: T) -> T {
    let one = T::one();

    // A&S 7.1.26 coefficients
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);

    // Horner form of a1·t + a2·t² + ... + a5·t⁵
    let poly = t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))));
    let erf_abs = one - poly * (-abs_x * abs_x).exp();

    // erf is odd: erf(-x) = -erf(x)
    if x.is_sign_negative() {
        -erf_abs
    } else {
        erf_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1 + erf(x / √2)) / 2
///
/// # Accuracy
/// Accurate to at least 1e-7 for all finite x, and stable in the tails
/// (|x| ≥ 8 still returns values inside [0, 1]).
///
/// # Examples
/// ```
/// use optique_core::math::normal::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();

    half * (T::one() + erf_approx(x / sqrt_2))
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / √(2π)) · e^(-x² / 2)
///
/// # Examples
/// ```
/// use optique_core::math::normal::norm_pdf;
///
/// // φ(0) = 1 / √(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let scale = T::from(FRAC_1_SQRT_2PI).unwrap();

    scale * (-half * x * x).exp()
}

//! Property-based tests for the pricing and Greeks engines.
//!
//! Inputs are drawn from the ranges a front-end typically exposes
//! (S, K in [50, 250], T in [0.1, 5], r in [0, 1], σ in (0, 1]), which also
//! stresses the far tails of Φ at low volatility and long expiry.

use approx::assert_relative_eq;
use optique_models::analytical::BlackScholes;
use optique_models::instruments::{OptionParams, OptionType};
use proptest::prelude::*;

fn spot_strategy() -> impl Strategy<Value = f64> {
    50.0..250.0
}

fn strike_strategy() -> impl Strategy<Value = f64> {
    50.0..250.0
}

fn expiry_strategy() -> impl Strategy<Value = f64> {
    0.1..5.0
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    0.0..1.0
}

fn vol_strategy() -> impl Strategy<Value = f64> {
    0.01..1.0
}

fn engine(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64) -> BlackScholes<f64> {
    BlackScholes::new(OptionParams::new(spot, strike, expiry, rate, vol).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_put_call_parity(
        spot in spot_strategy(),
        strike in strike_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
        vol in vol_strategy()
    ) {
        let bs = engine(spot, strike, expiry, rate, vol);
        let forward = spot - strike * (-rate * expiry).exp();
        let parity = bs.price_call() - bs.price_put();

        // C - P = S - K·e^(-rT), preserved exactly by the two formulas
        assert_relative_eq!(parity, forward, epsilon = 1e-8, max_relative = 1e-8);
    }

    #[test]
    fn prop_prices_non_negative(
        spot in spot_strategy(),
        strike in strike_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
        vol in vol_strategy()
    ) {
        let bs = engine(spot, strike, expiry, rate, vol);
        // Non-negative up to rounding; deep-tail prices cancel to ~1e-14
        prop_assert!(bs.price_call() >= -1e-9);
        prop_assert!(bs.price_put() >= -1e-9);
    }

    #[test]
    fn prop_call_non_decreasing_in_spot(
        spot in 50.0..200.0_f64,
        strike in strike_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
        vol in vol_strategy()
    ) {
        let lo = engine(spot, strike, expiry, rate, vol).price_call();
        let hi = engine(spot * 1.05, strike, expiry, rate, vol).price_call();
        prop_assert!(hi >= lo - 1e-9, "call decreased: {} -> {}", lo, hi);
    }

    #[test]
    fn prop_put_non_increasing_in_spot(
        spot in 50.0..200.0_f64,
        strike in strike_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
        vol in vol_strategy()
    ) {
        let lo = engine(spot, strike, expiry, rate, vol).price_put();
        let hi = engine(spot * 1.05, strike, expiry, rate, vol).price_put();
        prop_assert!(hi <= lo + 1e-9, "put increased: {} -> {}", lo, hi);
    }

    #[test]
    fn prop_gamma_and_vega_positive(
        spot in spot_strategy(),
        strike in strike_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
        vol in vol_strategy()
    ) {
        let greeks = engine(spot, strike, expiry, rate, vol).greeks();
        prop_assert!(greeks.gamma > 0.0);
        prop_assert!(greeks.vega > 0.0);
    }

    #[test]
    fn prop_delta_within_unit_interval(
        spot in spot_strategy(),
        strike in strike_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
        vol in vol_strategy()
    ) {
        let delta = engine(spot, strike, expiry, rate, vol).greeks().delta;
        prop_assert!((0.0..=1.0).contains(&delta));
    }

    #[test]
    fn prop_call_bounded_by_spot(
        spot in spot_strategy(),
        strike in strike_strategy(),
        expiry in expiry_strategy(),
        rate in rate_strategy(),
        vol in vol_strategy()
    ) {
        // A call can never be worth more than the underlying itself
        let call = engine(spot, strike, expiry, rate, vol).price_call();
        prop_assert!(call <= spot + 1e-9);
    }

    #[test]
    fn prop_non_positive_inputs_rejected(
        value in -10.0..=0.0_f64,
        spot in spot_strategy(),
        strike in strike_strategy(),
        expiry in expiry_strategy(),
        vol in vol_strategy()
    ) {
        prop_assert!(OptionParams::new(value, strike, expiry, 0.05, vol).is_err());
        prop_assert!(OptionParams::new(spot, value, expiry, 0.05, vol).is_err());
        prop_assert!(OptionParams::new(spot, strike, value, 0.05, vol).is_err());
        prop_assert!(OptionParams::new(spot, strike, expiry, 0.05, value).is_err());
    }
}

#[test]
fn option_type_labels_match_front_end_behaviour() {
    // A UI passes whatever capitalisation its widget produced; all spellings
    // must price identically and anything else must be refused.
    let bs = engine(100.0, 100.0, 1.0, 0.05, 0.2);

    let reference = bs.price("call".parse::<OptionType>().unwrap());
    for label in ["Call", "CALL"] {
        let price = bs.price(label.parse::<OptionType>().unwrap());
        assert_eq!(price, reference);
    }

    assert!("straddle".parse::<OptionType>().is_err());
}

//! Property tests for the VaR reducers.

use approx::assert_relative_eq;
use pricer_core::types::PricingError;
use pricer_pricing::mc::{simulate, SimulationParameters, TerminalValueBatch};
use pricer_pricing::rng::PricerRng;
use pricer_risk::var::{parametric_var, value_at_risk};
use proptest::prelude::*;

proptest! {
    #[test]
    fn var_non_decreasing_in_confidence(
        values in prop::collection::vec(1.0f64..500.0, 1..200),
        c1 in 0.01f64..0.99,
        c2 in 0.01f64..0.99,
    ) {
        let (lo, hi) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
        let batch = TerminalValueBatch::from_values(values);
        let var_lo = value_at_risk(&batch, 250.0, lo).unwrap();
        let var_hi = value_at_risk(&batch, 250.0, hi).unwrap();
        prop_assert!(var_hi >= var_lo - 1e-9);
    }

    #[test]
    fn var_bounded_by_batch_extremes(
        values in prop::collection::vec(1.0f64..500.0, 1..200),
        c in 0.01f64..0.99,
    ) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let batch = TerminalValueBatch::from_values(values);
        let var = value_at_risk(&batch, 250.0, c).unwrap();
        prop_assert!(var <= 250.0 - min + 1e-9);
        prop_assert!(var >= 250.0 - max - 1e-9);
    }

    #[test]
    fn parametric_var_non_decreasing_in_confidence(
        c1 in 0.5f64..0.999,
        c2 in 0.5f64..0.999,
        sigma in 0.0f64..0.1,
    ) {
        let (lo, hi) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
        let var_lo = parametric_var(1e6, lo, 0.0, sigma).unwrap();
        let var_hi = parametric_var(1e6, hi, 0.0, sigma).unwrap();
        prop_assert!(var_hi >= var_lo - 1e-6);
    }
}

#[test]
fn simulated_var_rises_with_confidence() {
    let params = SimulationParameters::new(1e6, 0.0005, 0.02, 1.0, 100_000).unwrap();
    let batch = simulate(&params, &mut PricerRng::from_seed(42));

    let levels = [0.90, 0.95, 0.975, 0.99];
    let vars: Vec<f64> = levels
        .iter()
        .map(|&c| value_at_risk(&batch, 1e6, c).unwrap())
        .collect();

    assert!(vars.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn confidence_boundaries_are_invalid_input() {
    let batch = TerminalValueBatch::from_values(vec![1.0, 2.0, 3.0]);
    for c in [0.0, 1.0, -0.1, 1.5] {
        assert!(matches!(
            value_at_risk(&batch, 3.0, c),
            Err(PricingError::InvalidInput(_))
        ));
    }
}

#[test]
fn monte_carlo_and_parametric_agree_for_small_sigma() {
    // Lognormal and normal quantiles coincide to first order for small σ.
    let (mu, sigma) = (0.0, 0.01);
    let params = SimulationParameters::new(1e6, mu, sigma, 1.0, 200_000).unwrap();
    let batch = simulate(&params, &mut PricerRng::from_seed(2017));

    let mc = value_at_risk(&batch, 1e6, 0.95).unwrap();
    let closed = parametric_var(1e6, 0.95, mu, sigma).unwrap();
    assert_relative_eq!(mc, closed, max_relative = 0.05);
}

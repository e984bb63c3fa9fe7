//! Standard Wiener process sampling.
//!
//! `W(0) = 0` and each increment is an independent `N(0, dt)` draw, produced
//! as `sqrt(dt) × Z` from the caller's generator.
//!
//! The time axis counts steps: `n + 1` evenly spaced points from `t0` to
//! `n`, so the default `t0 = 0` labels the points `0, 1, ..., n`. `dt` only
//! sets the variance of each increment.

use crate::rng::PricerRng;
use pricer_core::types::{ensure_finite, ensure_positive, PricingError, PricingResult};

/// A sampled Wiener path on a uniform grid.
#[derive(Clone, Debug, PartialEq)]
pub struct WienerPath {
    /// `n + 1` evenly spaced times from `t0` to `n`.
    pub times: Vec<f64>,
    /// Process values, `values[0] == 0`.
    pub values: Vec<f64>,
}

/// Samples a Wiener process over `n_steps` increments of variance `dt`.
///
/// Consumes exactly `n_steps` normal draws; the result has `n_steps + 1`
/// points.
///
/// # Arguments
///
/// * `dt` - Variance of each increment
/// * `t0` - First grid label; the grid runs evenly from `t0` to `n_steps`
/// * `n_steps` - Number of increments
/// * `rng` - Generator supplying the increments
///
/// # Errors
///
/// `InvalidInput` if `dt <= 0`, `t0` is non-finite, or `n_steps == 0`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::wiener_process;
/// use pricer_pricing::rng::PricerRng;
///
/// let path = wiener_process(0.1, 0.0, 1000, &mut PricerRng::from_seed(1)).unwrap();
/// assert_eq!(path.values.len(), 1001);
/// assert_eq!(path.values[0], 0.0);
/// assert_eq!(path.times[1000], 1000.0);
/// ```
pub fn wiener_process(
    dt: f64,
    t0: f64,
    n_steps: usize,
    rng: &mut PricerRng,
) -> PricingResult<WienerPath> {
    ensure_positive("time step", dt)?;
    ensure_finite("grid start", t0)?;
    if n_steps == 0 {
        return Err(PricingError::invalid_input("step count must be positive"));
    }

    let mut increments = vec![0.0; n_steps];
    rng.fill_normal(&mut increments);

    let sqrt_dt = dt.sqrt();
    let mut values = Vec::with_capacity(n_steps + 1);
    values.push(0.0);
    let mut w = 0.0;
    for z in increments {
        w += sqrt_dt * z;
        values.push(w);
    }

    Ok(WienerPath {
        times: step_grid(t0, n_steps),
        values,
    })
}

/// `n + 1` evenly spaced points from `t0` to `n`, endpoints exact.
fn step_grid(t0: f64, n_steps: usize) -> Vec<f64> {
    let end = n_steps as f64;
    let span = end - t0;
    let mut times: Vec<f64> = (0..=n_steps)
        .map(|i| t0 + i as f64 * span / end)
        .collect();
    times[n_steps] = end;
    times
}

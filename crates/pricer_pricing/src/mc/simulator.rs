//! GBM terminal-value simulation.
//!
//! Each path is a single draw from the exact GBM solution at the horizon;
//! there is no time stepping.
//!
//! ```text
//! S_i = S(0) × exp(T(μ - σ²/2) + σ√T × z_i)
//! ```
//!
//! # Reproducibility
//!
//! [`simulate`] consumes exactly `path_count` draws from the caller's
//! generator and returns values in draw order. [`simulate_parallel`] splits
//! the batch into fixed chunks of [`PARALLEL_CHUNK_SIZE`] paths, each driven
//! by its own sub-stream; its output depends only on the seed, never on the
//! rayon thread count, but differs from the sequential stream.

use super::config::SimulationParameters;
use crate::rng::PricerRng;
use rayon::prelude::*;

/// Paths per independently seeded chunk in [`simulate_parallel`].
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;

/// Simulated terminal values, one per path, in draw order.
///
/// The batch is never mutated after creation; reducers that need a sorted
/// view work on their own copy.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalValueBatch {
    values: Vec<f64>,
}

impl TerminalValueBatch {
    /// Wraps externally produced terminal values.
    ///
    /// Reducers validate the batch at first use, so an empty batch is
    /// representable here and rejected there.
    #[inline]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Terminal values in draw order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the batch holds no paths.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the batch, returning the underlying values.
    #[inline]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Maps standard normal variates to terminal values in place.
#[inline]
fn transform_in_place(buffer: &mut [f64], initial_value: f64, drift_term: f64, vol_term: f64) {
    for value in buffer.iter_mut() {
        *value = initial_value * (drift_term + vol_term * *value).exp();
    }
}

/// Simulates `params.path_count()` terminal values.
///
/// # Arguments
///
/// * `params` - Validated simulation parameters
/// * `rng` - Generator owned exclusively by this call for its duration
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{simulate, SimulationParameters};
/// use pricer_pricing::rng::PricerRng;
///
/// let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 1_000).unwrap();
/// let mut rng = PricerRng::from_seed(42);
///
/// let batch = simulate(&params, &mut rng);
/// assert_eq!(batch.len(), 1_000);
/// assert!(batch.values().iter().all(|&s| s > 0.0));
/// ```
pub fn simulate(params: &SimulationParameters, rng: &mut PricerRng) -> TerminalValueBatch {
    let (drift_term, vol_term) = params.exponent_terms();

    let mut values = vec![0.0; params.path_count()];
    rng.fill_normal(&mut values);
    transform_in_place(&mut values, params.initial_value(), drift_term, vol_term);

    tracing::trace!(
        paths = values.len(),
        seed = rng.seed(),
        "simulated GBM terminal values"
    );

    TerminalValueBatch { values }
}

/// Simulates terminal values on the rayon pool.
///
/// Chunk `k` (paths `k * PARALLEL_CHUNK_SIZE ..`) draws from
/// [`PricerRng::substream(seed, k)`](PricerRng::substream).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{simulate_parallel, SimulationParameters};
///
/// let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 50_000).unwrap();
///
/// let a = simulate_parallel(&params, 7);
/// let b = simulate_parallel(&params, 7);
/// assert_eq!(a, b);
/// ```
pub fn simulate_parallel(params: &SimulationParameters, seed: u64) -> TerminalValueBatch {
    let (drift_term, vol_term) = params.exponent_terms();
    let initial_value = params.initial_value();

    let mut values = vec![0.0; params.path_count()];
    values
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .enumerate()
        .for_each(|(chunk_idx, chunk)| {
            let mut rng = PricerRng::substream(seed, chunk_idx as u64);
            rng.fill_normal(chunk);
            transform_in_place(chunk, initial_value, drift_term, vol_term);
        });

    tracing::trace!(
        paths = values.len(),
        chunks = values.len().div_ceil(PARALLEL_CHUNK_SIZE),
        seed,
        "simulated GBM terminal values in parallel"
    );

    TerminalValueBatch { values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(path_count: usize) -> SimulationParameters {
        SimulationParameters::new(100.0, 0.05, 0.2, 1.0, path_count).unwrap()
    }

    #[test]
    fn test_batch_size_matches_path_count() {
        let mut rng = PricerRng::from_seed(1);
        for n in [1, 7, 1000] {
            assert_eq!(simulate(&params(n), &mut rng).len(), n);
        }
    }

    #[test]
    fn test_values_positive_and_finite() {
        let p = SimulationParameters::new(100.0, -0.5, 1.5, 2.0, 10_000).unwrap();
        let batch = simulate(&p, &mut PricerRng::from_seed(3));
        assert!(batch.values().iter().all(|&s| s > 0.0 && s.is_finite()));
    }

    #[test]
    fn test_reproducible_with_same_seed() {
        let a = simulate(&params(500), &mut PricerRng::from_seed(12345));
        let b = simulate(&params(500), &mut PricerRng::from_seed(12345));
        assert_eq!(a, b);
    }

    #[test]
    fn test_consumes_exactly_path_count_draws() {
        let mut rng = PricerRng::from_seed(77);
        let _ = simulate(&params(10), &mut rng);
        let after = rng.gen_normal();

        let mut reference = PricerRng::from_seed(77);
        let mut skip = vec![0.0; 10];
        reference.fill_normal(&mut skip);
        assert_eq!(after, reference.gen_normal());
    }

    #[test]
    fn test_matches_closed_form_per_variate() {
        let p = params(5);
        let mut rng = PricerRng::from_seed(8);
        let batch = simulate(&p, &mut rng);

        let mut z = vec![0.0; 5];
        PricerRng::from_seed(8).fill_normal(&mut z);
        for (s, z) in batch.values().iter().zip(&z) {
            let expected = 100.0 * (1.0 * (0.05 - 0.5 * 0.04) + 0.2 * z).exp();
            assert_relative_eq!(*s, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_volatility_is_deterministic_growth() {
        let p = SimulationParameters::new(100.0, 0.05, 0.0, 2.0, 4).unwrap();
        let batch = simulate(&p, &mut PricerRng::from_seed(0));
        for &s in batch.values() {
            assert_relative_eq!(s, 100.0 * 0.1_f64.exp(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_terminal_mean_matches_expectation() {
        // E[S(T)] = S(0) exp(μT)
        let batch = simulate(&params(200_000), &mut PricerRng::from_seed(42));
        let mean = batch.values().iter().sum::<f64>() / batch.len() as f64;
        assert_relative_eq!(mean, 100.0 * 0.05_f64.exp(), max_relative = 0.01);
    }

    #[test]
    fn test_parallel_reproducible_and_sized() {
        let p = params(3 * PARALLEL_CHUNK_SIZE + 11);
        let a = simulate_parallel(&p, 21);
        let b = simulate_parallel(&p, 21);
        assert_eq!(a.len(), p.path_count());
        assert_eq!(a, b);
        assert!(a.values().iter().all(|&s| s > 0.0));
    }

    #[test]
    fn test_parallel_first_chunk_uses_substream_zero() {
        let p = params(10);
        let batch = simulate_parallel(&p, 5);
        let sequential = simulate(&p, &mut PricerRng::substream(5, 0));
        assert_eq!(batch, sequential);
    }
}

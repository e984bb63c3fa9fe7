//! Monte Carlo European option pricer.
//!
//! [`MonteCarloOptionPricer`] owns its generator and runs a fresh risk-neutral
//! simulation for every pricing call, mirroring a standalone call/put pricing
//! run. Callers that want several payoffs from one batch can use
//! [`simulate`](super::simulator::simulate) and [`price`](super::payoff::price)
//! directly.

use super::config::SimulationParameters;
use super::payoff::{price_with_error, OptionKind, OptionSpec, PriceEstimate};
use super::simulator::simulate;
use crate::rng::PricerRng;
use pricer_core::types::PricingResult;

/// Monte Carlo pricing engine for European calls and puts under GBM.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{MonteCarloOptionPricer, SimulationParameters};
///
/// let params = SimulationParameters::risk_neutral(100.0, 0.05, 0.2, 1.0, 10_000).unwrap();
/// let mut pricer = MonteCarloOptionPricer::new(params, 42);
///
/// let call = pricer.call_price(100.0).unwrap();
/// assert!((call - 10.45).abs() < 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloOptionPricer {
    params: SimulationParameters,
    seed: u64,
    rng: PricerRng,
}

impl MonteCarloOptionPricer {
    /// Creates a pricer over risk-neutral `params` (drift = risk-free rate).
    pub fn new(params: SimulationParameters, seed: u64) -> Self {
        Self {
            params,
            seed,
            rng: PricerRng::from_seed(seed),
        }
    }

    /// Returns the simulation parameters.
    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Risk-free rate used for both drift and discounting.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.params.drift()
    }

    /// Restores the generator to its initial seed.
    pub fn reset(&mut self) {
        self.rng = PricerRng::from_seed(self.seed);
    }

    /// Simulates a fresh batch and prices a `kind` option struck at `strike`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `strike` is negative or non-finite.
    pub fn price(&mut self, strike: f64, kind: OptionKind) -> PricingResult<PriceEstimate> {
        let spec = OptionSpec::new(strike, self.rate(), kind)?;
        let batch = simulate(&self.params, &mut self.rng);
        price_with_error(&batch, &spec, self.params.horizon())
    }

    /// Price of a European call.
    pub fn call_price(&mut self, strike: f64) -> PricingResult<f64> {
        self.price(strike, OptionKind::Call).map(|e| e.price)
    }

    /// Price of a European put.
    pub fn put_price(&mut self, strike: f64) -> PricingResult<f64> {
        self.price(strike, OptionKind::Put).map(|e| e.price)
    }
}

//! Monte Carlo simulation and reduction kernels.
//!
//! # Architecture
//!
//! ```text
//! SimulationParameters ──► simulate() ──► TerminalValueBatch ──► price()
//!        (config)            (PricerRng)                          (payoff)
//!                                                                    │
//! MonteCarloOptionPricer ── orchestrates simulate + price per call ──┘
//! ```
//!
//! # Examples
//!
//! ## Pricing a call and a put from one batch
//!
//! ```rust
//! use pricer_pricing::mc::{price, simulate, OptionSpec, SimulationParameters};
//! use pricer_pricing::rng::PricerRng;
//!
//! let params = SimulationParameters::risk_neutral(100.0, 0.05, 0.2, 1.0, 20_000).unwrap();
//! let batch = simulate(&params, &mut PricerRng::from_seed(42));
//!
//! let call = price(&batch, &OptionSpec::call(100.0, 0.05).unwrap(), 1.0).unwrap();
//! let put = price(&batch, &OptionSpec::put(100.0, 0.05).unwrap(), 1.0).unwrap();
//! println!("Value of the call option is ${:.2}", call);
//! println!("Value of the put option is ${:.2}", put);
//! ```

pub mod brownian;
pub mod config;
pub mod payoff;
pub mod pricer;
pub mod simulator;

pub use brownian::{wiener_process, WienerPath};
pub use config::{SimulationParameters, SimulationParametersBuilder, MAX_PATHS};
pub use payoff::{price, price_with_error, OptionKind, OptionSpec, PriceEstimate};
pub use pricer::MonteCarloOptionPricer;
pub use simulator::{simulate, simulate_parallel, TerminalValueBatch, PARALLEL_CHUNK_SIZE};

//! # Pricer Pricing (Layer 2: Monte Carlo Engine)
//!
//! ## Layer 2 Role
//!
//! pricer_pricing hosts the simulation engine shared by option pricing and
//! Value-at-Risk:
//! - Seeded random number generation (`rng`)
//! - Single-step GBM terminal simulation, sequential and rayon-parallel (`mc::simulator`)
//! - European payoff reduction with discounting (`mc::payoff`)
//! - A call/put pricing orchestrator (`mc::pricer`)
//! - Wiener process sampling (`mc::brownian`)
//! - Black-Scholes closed form for verification (`analytical`)
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::mc::{MonteCarloOptionPricer, SimulationParameters};
//!
//! let params = SimulationParameters::risk_neutral(100.0, 0.05, 0.2, 1.0, 10_000).unwrap();
//! let mut pricer = MonteCarloOptionPricer::new(params, 42);
//!
//! println!("Value of the call option is ${:.2}", pricer.call_price(100.0).unwrap());
//! println!("Value of the put option is ${:.2}", pricer.put_price(100.0).unwrap());
//! ```
//!
//! ## Concurrency
//!
//! Every simulation takes its generator by `&mut`, so one generator can only
//! ever serve one call at a time. Parallel simulation partitions the work
//! into deterministic sub-streams instead of sharing a generator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod mc;
pub mod rng;

pub use mc::{
    price, simulate, simulate_parallel, MonteCarloOptionPricer, OptionKind, OptionSpec,
    PriceEstimate, SimulationParameters, TerminalValueBatch,
};
pub use rng::PricerRng;

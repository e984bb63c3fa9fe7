//! # Random Number Generation Infrastructure
//!
//! This module provides the seeded random number generator that every
//! simulation call threads through explicitly. There is no ambient or global
//! RNG state anywhere in the workspace.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded; the same seed yields the
//!   same sequence of variates
//! - **Exclusive ownership**: Simulation functions take `&mut PricerRng`, so a
//!   generator can never be shared unsynchronised between concurrent calls
//! - **Partitioning**: [`PricerRng::substream`] derives independent,
//!   deterministic sub-streams for parallel work
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;

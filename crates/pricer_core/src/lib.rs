//! # pricer_core: Statistical Foundation for Monte Carlo Pricing and Risk
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error types: `PricingError` (`types::error`)
//! - Sample statistics and order-statistic percentiles (`math::statistics`)
//! - Standard normal CDF / PDF / quantile (`math::distributions`)
//! - Historical closing prices and the supplier trait (`market_data::history`)
//! - Drift and volatility estimation from prices (`market_data::estimation`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::estimate;
//! use pricer_core::math::{percentile, sorted_copy};
//!
//! let stats = estimate(&[100.0, 102.0, 101.0, 105.0]).unwrap();
//! assert!(stats.mean_log_return > 0.0);
//!
//! let sorted = sorted_copy(&[3.0, 1.0, 2.0]);
//! assert_eq!(percentile(&sorted, 50.0).unwrap(), 2.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;

//! # Pricer Risk
//!
//! Value-at-Risk on top of the Monte Carlo engine in `pricer_pricing`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              pricer_risk                │
//! ├─────────────────────────────────────────┤
//! │  var/monte_carlo  - percentile VaR,     │
//! │                     MonteCarloVar       │
//! │  var/parametric   - variance-covariance │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            pricer_pricing               │
//! │  GBM terminal simulator, seeded RNG     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::estimate;
//! use pricer_risk::var::{parametric_var, MonteCarloVar, RiskSpec};
//!
//! let closes = [100.0, 101.2, 100.7, 102.3, 101.9, 103.0];
//! let stats = estimate(&closes).unwrap();
//!
//! let spec = RiskSpec::new(1e6, 0.95).unwrap();
//! let mut model = MonteCarloVar::new(
//!     spec,
//!     stats.drift(),
//!     stats.volatility(),
//!     1.0,
//!     50_000,
//!     7,
//! )
//! .unwrap();
//!
//! let mc = model.value_at_risk().unwrap();
//! let closed = parametric_var(1e6, 0.95, stats.drift(), stats.volatility()).unwrap();
//! assert!(mc.is_finite() && closed.is_finite());
//! ```

#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

pub mod var;

pub use var::{parametric_var, parametric_var_n_days, value_at_risk, MonteCarloVar, RiskSpec};

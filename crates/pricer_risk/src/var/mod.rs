//! Value-at-Risk estimators.
//!
//! - [`monte_carlo`]: percentile of simulated terminal values
//! - [`parametric`]: variance-covariance closed form under normal returns
//!
//! A positive VaR is a loss relative to the initial position; a negative VaR
//! (possible with strong drift or low volatility) is a valid result.

pub mod monte_carlo;
pub mod parametric;

pub use monte_carlo::{value_at_risk, MonteCarloVar, RiskSpec};
pub use parametric::{parametric_var, parametric_var_n_days};

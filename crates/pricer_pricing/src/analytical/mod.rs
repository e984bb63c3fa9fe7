//! Analytical (closed-form) solutions for option pricing.
//!
//! These formulas verify Monte Carlo pricing accuracy.
//!
//! # Available Solutions
//!
//! - **European Options**: Black-Scholes (1973) closed form
//!
//! # Usage
//!
//! ```rust
//! use pricer_pricing::analytical::{black_scholes_call, black_scholes_put};
//!
//! let call = black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
//! let put = black_scholes_put(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
//! assert!((call - 10.4506).abs() < 1e-3);
//! assert!((put - 5.5735).abs() < 1e-3);
//! ```

pub mod black_scholes;

pub use black_scholes::{black_scholes_call, black_scholes_price, black_scholes_put};

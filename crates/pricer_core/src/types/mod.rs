//! Core error types.
//!
//! # Re-exports
//!
//! - [`PricingError`], [`PricingResult`] and the validation helpers from `error`

pub mod error;

pub use error::{
    ensure_confidence_level, ensure_finite, ensure_positive, PricingError, PricingResult,
};

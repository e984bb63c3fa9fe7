//! Error types for structured error handling.
//!
//! Every validation failure in the simulation and reduction layers surfaces
//! as a [`PricingError`]. Failures are deterministic: the same inputs always
//! produce the same error, so nothing here is retryable.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters (non-positive prices,
///   zero path counts, confidence levels outside `(0, 1)`, empty batches)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PricingError {
    /// Shorthand for building an [`PricingError::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        PricingError::InvalidInput(msg.into())
    }
}

/// Result alias used across the pricing crates.
pub type PricingResult<T> = Result<T, PricingError>;

/// Fails with `InvalidInput` unless `value` is finite and strictly positive.
pub fn ensure_positive(name: &str, value: f64) -> PricingResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidInput(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

/// Fails with `InvalidInput` unless `value` is finite.
pub fn ensure_finite(name: &str, value: f64) -> PricingResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidInput(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// Fails with `InvalidInput` unless `level` lies strictly inside `(0, 1)`.
pub fn ensure_confidence_level(level: f64) -> PricingResult<()> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidInput(format!(
            "confidence level must lie strictly inside (0, 1), got {}",
            level
        )))
    }
}

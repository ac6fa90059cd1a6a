//! # Validation Module
//!
//! Input validation utilities for kata-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Caller (CLI flag parsing)                                 │
//! │  ├── Shape checks (is it a number, is it a list)                    │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - value validation                            │
//! │  ├── Ranges, positivity, non-emptiness                              │
//! │  └── Typed errors, raised before any computation                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pair-sum module carries its own strict/lenient *presence* checks in
//! `pair.rs`; this module validates *values* for the VAT math.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a VAT rate in whole percentage points.
///
/// ## Rules
/// - Must be positive (> 0): there is no zero-percent VAT application
/// - Must not exceed 100
///
/// ## Example
/// ```rust
/// use kata_core::validation::validate_vat_rate;
///
/// assert!(validate_vat_rate(20).is_ok());
/// assert!(validate_vat_rate(0).is_err());
/// assert!(validate_vat_rate(101).is_err());
/// ```
pub fn validate_vat_rate(percent: u32) -> ValidationResult<()> {
    if percent == 0 {
        return Err(ValidationError::MustBePositive { field: "vat rate" });
    }

    if percent > 100 {
        return Err(ValidationError::OutOfRange {
            field: "vat rate",
            min: 1,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a price list for VAT application.
///
/// ## Rules
/// - Must not be empty
/// - Every price must be positive (> 0); VAT on a free or negative line
///   is meaningless here
pub fn validate_prices(prices: &[Money]) -> ValidationResult<()> {
    if prices.is_empty() {
        return Err(ValidationError::Required { field: "prices" });
    }

    if !prices.iter().all(Money::is_positive) {
        return Err(ValidationError::MustBePositive { field: "price" });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_vat_rate() {
        assert!(validate_vat_rate(1).is_ok());
        assert!(validate_vat_rate(20).is_ok());
        assert!(validate_vat_rate(100).is_ok());

        assert!(validate_vat_rate(0).is_err());
        assert!(validate_vat_rate(101).is_err());
    }

    #[test]
    fn test_validate_prices() {
        assert!(validate_prices(&[Money::from_pence(1000)]).is_ok());

        assert!(validate_prices(&[]).is_err());
        assert!(validate_prices(&[Money::from_pence(1000), Money::zero()]).is_err());
        assert!(validate_prices(&[Money::from_pence(-100)]).is_err());
    }
}

//! # VAT Calculation
//!
//! Applies Value Added Tax to a list of net prices.
//!
//! ## Call Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         apply_vat                                   │
//! │                                                                     │
//! │  VatRate::new(20) ──► validate rate (1..=100)                       │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  apply_vat(rate, prices)                                            │
//! │        ├── prices empty or non-positive → ValidationError           │
//! │        ├── rate not in {5, 20}          → NonStandardVatRate        │
//! │        └── OK → each price grown by rate%, rounded to the penny     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Standard UK rates only: reduced (5%) and standard (20%). Any other rate
//! is syntactically valid but rejected as non-standard.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_prices, validate_vat_rate, ValidationResult};

/// VAT rates accepted by [`apply_vat`], in whole percentage points.
pub const STANDARD_VAT_RATES: &[u32] = &[5, 20];

// =============================================================================
// VAT Rate
// =============================================================================

/// A VAT rate in whole percentage points, validated on construction.
///
/// Construction enforces the 1..=100 range; whether the rate is a
/// *standard* one is checked at application time, so a caller can build
/// a non-standard rate and get the typed rejection from [`apply_vat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatRate(u32);

impl VatRate {
    /// Creates a VAT rate, rejecting 0 and anything above 100.
    ///
    /// ## Example
    /// ```rust
    /// use kata_core::vat::VatRate;
    ///
    /// assert!(VatRate::new(20).is_ok());
    /// assert!(VatRate::new(0).is_err());
    /// ```
    pub fn new(percent: u32) -> ValidationResult<Self> {
        validate_vat_rate(percent)?;
        Ok(VatRate(percent))
    }

    /// Returns the rate in whole percentage points.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0
    }

    /// Checks the rate against the standard set.
    #[inline]
    pub fn is_standard(&self) -> bool {
        STANDARD_VAT_RATES.contains(&self.0)
    }
}

// =============================================================================
// VAT Application
// =============================================================================

/// Applies VAT to a list of net prices, returning the gross prices.
///
/// ## Contract
/// - `prices` must be non-empty and every price positive, otherwise a
///   [`ValidationError`](crate::error::ValidationError) is raised
/// - `rate` must be one of [`STANDARD_VAT_RATES`], otherwise
///   [`CoreError::NonStandardVatRate`] is raised
/// - On success each price is grown by `rate` percent with the result
///   rounded to the nearest penny; the input order is preserved
///
/// ## Example
/// ```rust
/// use kata_core::money::Money;
/// use kata_core::vat::{apply_vat, VatRate};
///
/// let rate = VatRate::new(20).unwrap();
/// let gross = apply_vat(rate, &[Money::from_pence(1000)]).unwrap();
/// assert_eq!(gross[0].pence(), 1200); // £10.00 → £12.00
/// ```
pub fn apply_vat(rate: VatRate, prices: &[Money]) -> CoreResult<Vec<Money>> {
    validate_prices(prices)?;

    if !rate.is_standard() {
        return Err(CoreError::NonStandardVatRate {
            rate: rate.percent(),
            allowed: STANDARD_VAT_RATES,
        });
    }

    debug!(rate = rate.percent(), count = prices.len(), "applying VAT");

    Ok(prices
        .iter()
        .map(|price| price.grow_by_percent(rate.percent()))
        .collect())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn pences(values: &[i64]) -> Vec<Money> {
        values.iter().copied().map(Money::from_pence).collect()
    }

    #[test]
    fn test_standard_rate_applied() {
        let rate = VatRate::new(20).unwrap();
        let gross = apply_vat(rate, &pences(&[1000, 2000, 1200])).unwrap();
        assert_eq!(gross, pences(&[1200, 2400, 1440]));
    }

    #[test]
    fn test_reduced_rate_applied_with_rounding() {
        let rate = VatRate::new(5).unwrap();
        // £2.45 + 5% = £2.5725 → £2.57
        let gross = apply_vat(rate, &pences(&[1000, 245])).unwrap();
        assert_eq!(gross, pences(&[1050, 257]));
    }

    #[test]
    fn test_half_penny_tie_rounds_up() {
        let rate = VatRate::new(5).unwrap();
        // £2.50 + 5% = £2.625, an exact half-penny tie → £2.63
        let gross = apply_vat(rate, &pences(&[250])).unwrap();
        assert_eq!(gross, pences(&[263]));
    }

    #[test]
    fn test_non_standard_rate_rejected() {
        let rate = VatRate::new(17).unwrap();
        let err = apply_vat(rate, &pences(&[1000])).unwrap_err();
        assert!(matches!(err, CoreError::NonStandardVatRate { rate: 17, .. }));
    }

    #[test]
    fn test_rate_construction_bounds() {
        assert!(VatRate::new(1).is_ok());
        assert!(VatRate::new(100).is_ok());

        assert!(matches!(
            VatRate::new(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            VatRate::new(101),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_empty_price_list_rejected() {
        let rate = VatRate::new(20).unwrap();
        let err = apply_vat(rate, &[]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { field: "prices" })
        ));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let rate = VatRate::new(20).unwrap();
        let err = apply_vat(rate, &pences(&[1000, 0])).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_input_order_preserved() {
        let rate = VatRate::new(20).unwrap();
        let gross = apply_vat(rate, &pences(&[300, 100, 200])).unwrap();
        assert_eq!(gross, pences(&[360, 120, 240]));
    }
}

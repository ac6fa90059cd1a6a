//! # Error Types
//!
//! Domain-specific error types for kata-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  kata-core errors (this file)                                       │
//! │  ├── CoreError        - Domain errors (missing arguments, VAT)      │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  CLI errors (in app)                                                │
//! │  └── Box<dyn Error>   - What the console caller prints              │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → CLI → user                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (parameter name, rate value)
//! 3. Errors are enum variants, never String
//! 4. "No pair found" is NOT an error - it is a normal `PairResult` value

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These represent misuse of the call boundary or a business rule violation.
/// They are raised before any computation runs and are never retried; callers
/// are expected to fix the call site.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required parameter was not supplied at all.
    ///
    /// ## When This Occurs
    /// - Strict-mode `find_pair` called with `None` for the sequence
    /// - Strict-mode `find_pair` called with `None` for the target
    ///
    /// ## Not To Be Confused With
    /// An *empty* sequence, which is a valid input and simply yields
    /// `PairResult::NotFound`.
    #[error("No value passed for parameter `{param}`")]
    MissingArgument { param: &'static str },

    /// VAT rate is syntactically valid but not a standard rate.
    ///
    /// ## When This Occurs
    /// - `apply_vat` called with a rate outside the standard set (5%, 20%)
    #[error("VAT rate {rate}% is not a standard rate (expected one of {allowed:?})")]
    NonStandardVatRate { rate: u32, allowed: &'static [u32] },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a supplied value does not meet requirements.
/// Used for early validation before any computation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

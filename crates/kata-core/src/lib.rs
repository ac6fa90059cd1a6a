//! # kata-core: Pure Exercise Logic
//!
//! This crate is the **heart** of the kata workspace. It contains the
//! exercise logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Kata Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                     apps/cli (caller)                         │ │
//! │  │     find-pair ──► palindrome ──► add-vat                      │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │ function calls                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ kata-core (THIS CRATE) ★                      │ │
//! │  │                                                               │ │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌──────────┐ │ │
//! │  │   │   pair    │  │ palindrome │  │ money/vat │  │validation│ │ │
//! │  │   │ PairResult│  │   check    │  │   Money   │  │  rules   │ │ │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └──────────┘ │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                   │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pair`] - Pair-sum search with strict and lenient validation modes
//! - [`palindrome`] - Case-insensitive palindrome check
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`vat`] - VAT application over price lists
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input =
//!    same output, no hidden state between calls
//! 2. **No I/O**: network, file system and console access is FORBIDDEN here
//! 3. **Explicit Errors**: all errors are typed, never strings or panics;
//!    "no pair found" is a normal value, not an error
//!
//! ## Example Usage
//!
//! ```rust
//! use kata_core::pair::{find_pair, PairResult};
//!
//! let sequence = [3.0, 5.0, -4.0, 8.0, 11.0, 1.0, -1.0, 6.0];
//! let result = find_pair(Some(&sequence), Some(10.0)).unwrap();
//! assert_eq!(result, PairResult::Found { first: 11.0, second: -1.0 });
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pair;
pub mod palindrome;
pub mod validation;
pub mod vat;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kata_core::PairResult` instead of
// `use kata_core::pair::PairResult`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pair::{find_pair, find_pair_lenient, PairResult};
pub use palindrome::is_palindrome;
pub use vat::{apply_vat, VatRate};

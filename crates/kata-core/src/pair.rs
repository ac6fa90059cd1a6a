//! # Pair-Sum Search
//!
//! Finds two values at *distinct positions* of a sequence that add up to a
//! target sum.
//!
//! ## Call Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       PairSumFinder                                 │
//! │                                                                     │
//! │  caller ──► validate inputs ──► search ──► PairResult               │
//! │                   │                                                 │
//! │                   └── strict:  absent parameter → MissingArgument   │
//! │                   └── lenient: malformed input  → NotFound          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation Modes
//! Two entry points carry the two historical validation policies:
//!
//! - [`find_pair`] (**strict**): an absent parameter is a typed error.
//!   An *empty* sequence is a valid input, not an absence.
//! - [`find_pair_lenient`] (**lenient**): malformed input (absent, not
//!   list-like, non-numeric) is treated identically to "no solution" and
//!   yields [`PairResult::NotFound`] without raising.
//!
//! Both modes reject pairing a single element with itself: only pairs of
//! distinct positions are considered.
//!
//! ## Search Order
//! Brute-force nested scan: outer index ascending, inner index ascending,
//! skipping `i == j`; the first matching `(i, j)` wins. With duplicate
//! values the sequence may contain several qualifying pairs, so callers and
//! tests rely on this exact order. A hash-based O(n) search is deliberately
//! not used because it would return a different pair in those cases.
//!
//! ## Usage
//! ```rust
//! use kata_core::pair::{find_pair, PairResult};
//!
//! let result = find_pair(Some(&[3.0, 5.0, -4.0, 8.0, 11.0, 1.0, -1.0, 6.0]), Some(10.0));
//! assert_eq!(result.unwrap(), PairResult::Found { first: 11.0, second: -1.0 });
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Pair Result
// =============================================================================

/// Outcome of a pair-sum search.
///
/// `NotFound` is a normal, expected value - "no two numbers sum to the
/// target" is a recoverable outcome, never an error. Callers branch on it
/// without any error-handling machinery.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PairResult {
    /// Two values at distinct positions summing to the target, in search
    /// order: `first` is the outer-index value, `second` the inner-index one.
    Found { first: f64, second: f64 },
    /// No two distinct positions sum to the target.
    NotFound,
}

impl PairResult {
    /// Returns `true` if a pair was found.
    #[inline]
    pub const fn is_found(&self) -> bool {
        matches!(self, PairResult::Found { .. })
    }

    /// Converts to an `Option`, discarding the marker.
    #[inline]
    pub fn into_pair(self) -> Option<(f64, f64)> {
        match self {
            PairResult::Found { first, second } => Some((first, second)),
            PairResult::NotFound => None,
        }
    }
}

/// Human-readable rendering: `(11, -1)` or `no pair found`.
impl fmt::Display for PairResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairResult::Found { first, second } => write!(f, "({first}, {second})"),
            PairResult::NotFound => write!(f, "no pair found"),
        }
    }
}

// =============================================================================
// Strict Mode
// =============================================================================

/// Finds a pair summing to `target` - **strict** validation mode.
///
/// ## Contract
/// - `None` for either parameter → [`CoreError::MissingArgument`]. This is a
///   call-site bug, raised before any search begins.
/// - `Some(&[])` (empty sequence) → `Ok(PairResult::NotFound)`. Empty is a
///   valid input, distinct from absent.
/// - Otherwise: the first pair in nested ascending order whose values sum to
///   the target, or `NotFound`.
///
/// ## Example
/// ```rust
/// use kata_core::pair::{find_pair, PairResult};
///
/// // A single 5 may not pair with itself
/// let result = find_pair(Some(&[5.0, 3.0, 8.0]), Some(10.0)).unwrap();
/// assert_eq!(result, PairResult::NotFound);
///
/// // Absent target is a typed error
/// assert!(find_pair(Some(&[5.0, 3.0, 8.0]), None).is_err());
/// ```
pub fn find_pair(sequence: Option<&[f64]>, target: Option<f64>) -> CoreResult<PairResult> {
    let sequence = sequence.ok_or(CoreError::MissingArgument { param: "sequence" })?;
    let target = target.ok_or(CoreError::MissingArgument { param: "target" })?;

    Ok(search(sequence, target))
}

// =============================================================================
// Lenient Mode
// =============================================================================

/// Finds a pair summing to `target` - **lenient** validation mode.
///
/// Operates on loosely-typed JSON values so that "wrong shape" inputs can be
/// expressed at all. Malformed input is treated identically to "no
/// solution":
///
/// - `sequence` is `null` or not an array → `NotFound`
/// - any sequence element is not a number → `NotFound`
/// - `target` is `null` or not a number (e.g. the string `"4"`) → `NotFound`
///
/// Nothing is ever raised from this entry point.
///
/// ## Example
/// ```rust
/// use kata_core::pair::{find_pair_lenient, PairResult};
/// use serde_json::json;
///
/// // Non-numeric target: no error, just an empty result
/// let result = find_pair_lenient(&json!([1, 5, 2, 5, 3, 23, 5]), &json!("4"));
/// assert_eq!(result, PairResult::NotFound);
/// ```
pub fn find_pair_lenient(sequence: &Value, target: &Value) -> PairResult {
    let Some(items) = sequence.as_array() else {
        debug!("lenient input rejected: sequence is not an array");
        return PairResult::NotFound;
    };
    let Some(target) = target.as_f64() else {
        debug!("lenient input rejected: target is not numeric");
        return PairResult::NotFound;
    };

    let mut numbers = Vec::with_capacity(items.len());
    for item in items {
        match item.as_f64() {
            Some(n) => numbers.push(n),
            None => {
                debug!(?item, "lenient input rejected: non-numeric element");
                return PairResult::NotFound;
            }
        }
    }

    search(&numbers, target)
}

// =============================================================================
// Search
// =============================================================================

/// Reference nested scan shared by both modes.
///
/// Outer index ascending, inner index ascending, `i == j` skipped. The sum
/// comparison is exact; callers supply the values as given, no epsilon.
fn search(sequence: &[f64], target: f64) -> PairResult {
    for i in 0..sequence.len() {
        for j in 0..sequence.len() {
            if i == j {
                continue;
            }
            if sequence[i] + sequence[j] == target {
                trace!(i, j, "pair found");
                return PairResult::Found {
                    first: sequence[i],
                    second: sequence[j],
                };
            }
        }
    }

    PairResult::NotFound
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const REFERENCE: &[f64] = &[3.0, 5.0, -4.0, 8.0, 11.0, 1.0, -1.0, 6.0];

    #[test]
    fn test_no_self_pairing() {
        // Only one 5 exists; 5+5=10 must not count
        let result = find_pair(Some(&[5.0, 3.0, 8.0]), Some(10.0)).unwrap();
        assert_eq!(result, PairResult::NotFound);
    }

    #[test]
    fn test_duplicate_positions_may_pair() {
        // Two 5s at distinct positions are a valid pair
        let result = find_pair(Some(&[5.0, 5.0]), Some(10.0)).unwrap();
        assert_eq!(
            result,
            PairResult::Found {
                first: 5.0,
                second: 5.0
            }
        );
    }

    #[test]
    fn test_deterministic_selection_order() {
        // Several pairs sum to 10; the nested ascending scan reaches
        // (11, -1) first
        let result = find_pair(Some(REFERENCE), Some(10.0)).unwrap();
        assert_eq!(
            result,
            PairResult::Found {
                first: 11.0,
                second: -1.0
            }
        );
    }

    #[test]
    fn test_empty_sequence_is_not_an_error() {
        let result = find_pair(Some(&[]), Some(10.0)).unwrap();
        assert_eq!(result, PairResult::NotFound);
    }

    #[test]
    fn test_single_element_sequence() {
        let result = find_pair(Some(&[5.0]), Some(10.0)).unwrap();
        assert_eq!(result, PairResult::NotFound);
    }

    #[test]
    fn test_strict_missing_target() {
        let err = find_pair(Some(REFERENCE), None).unwrap_err();
        assert!(matches!(err, CoreError::MissingArgument { param: "target" }));
    }

    #[test]
    fn test_strict_missing_sequence() {
        let err = find_pair(None, Some(10.0)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingArgument { param: "sequence" }
        ));
    }

    #[test]
    fn test_lenient_non_numeric_target() {
        let result = find_pair_lenient(&json!([1, 5, 2, 5, 3, 23, 5]), &json!("4"));
        assert_eq!(result, PairResult::NotFound);
    }

    #[test]
    fn test_lenient_absent_inputs() {
        assert_eq!(
            find_pair_lenient(&Value::Null, &json!(10)),
            PairResult::NotFound
        );
        assert_eq!(
            find_pair_lenient(&json!([1, 2]), &Value::Null),
            PairResult::NotFound
        );
    }

    #[test]
    fn test_lenient_sequence_not_list_like() {
        assert_eq!(
            find_pair_lenient(&json!("1,2,3"), &json!(3)),
            PairResult::NotFound
        );
    }

    #[test]
    fn test_lenient_non_numeric_element() {
        assert_eq!(
            find_pair_lenient(&json!([1, "two", 3]), &json!(4)),
            PairResult::NotFound
        );
    }

    #[test]
    fn test_lenient_happy_path_matches_strict() {
        let lenient = find_pair_lenient(&json!([3, 5, -4, 8, 11, 1, -1, 6]), &json!(10));
        let strict = find_pair(Some(REFERENCE), Some(10.0)).unwrap();
        assert_eq!(lenient, strict);
    }

    #[test]
    fn test_idempotent() {
        let first = find_pair(Some(REFERENCE), Some(10.0)).unwrap();
        let second = find_pair(Some(REFERENCE), Some(10.0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_target() {
        // 3 + (-4) = -1 is the first match in scan order
        let result = find_pair(Some(REFERENCE), Some(-1.0)).unwrap();
        assert_eq!(
            result,
            PairResult::Found {
                first: 3.0,
                second: -4.0
            }
        );
    }

    #[test]
    fn test_display_rendering() {
        let found = PairResult::Found {
            first: 11.0,
            second: -1.0
        };
        assert_eq!(found.to_string(), "(11, -1)");
        assert_eq!(PairResult::NotFound.to_string(), "no pair found");
    }

    #[test]
    fn test_serialization_shape() {
        let found = PairResult::Found {
            first: 5.0,
            second: 5.0
        };
        let json = serde_json::to_value(found).unwrap();
        assert_eq!(json["outcome"], "found");

        let json = serde_json::to_value(PairResult::NotFound).unwrap();
        assert_eq!(json["outcome"], "not_found");
    }
}

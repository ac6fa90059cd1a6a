//! # Palindrome Check
//!
//! Case-insensitive palindrome test over trimmed text. Blank input is not a
//! palindrome; there is no error surface.

use tracing::trace;

/// Checks whether `value` reads the same forwards and backwards.
///
/// Leading/trailing whitespace is ignored and the comparison is
/// case-insensitive. Empty or whitespace-only input returns `false`.
///
/// ## Example
/// ```rust
/// use kata_core::palindrome::is_palindrome;
///
/// assert!(is_palindrome("Hannah"));
/// assert!(is_palindrome("hannah "));
/// assert!(!is_palindrome("ingrid"));
/// assert!(!is_palindrome("   "));
/// ```
pub fn is_palindrome(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        trace!("blank input, not a palindrome");
        return false;
    }

    // Lowercasing may change the char count (e.g. 'İ'), so collect first
    let chars: Vec<char> = trimmed.chars().flat_map(char::to_lowercase).collect();

    let mut front = 0;
    let mut back = chars.len() - 1;
    while front < back {
        if chars[front] != chars[back] {
            return false;
        }
        front += 1;
        back -= 1;
    }

    true
}

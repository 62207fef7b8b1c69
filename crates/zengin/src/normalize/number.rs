//! Numeric field normalization.

use super::{CharsetViolation, fold_width};

/// Pattern reported when a numeric value is rejected.
pub const NUMBER_PATTERN: &str = "[0-9]*";

/// Normalizes a numeric field value.
///
/// Full-width digits are folded to ASCII, then every character must be an
/// ASCII digit. The empty string is valid.
///
/// # Example
///
/// ```
/// use zengin::normalize::normalize_number;
///
/// assert_eq!(normalize_number("０００１").unwrap(), "0001");
/// assert!(normalize_number("12-3").is_err());
/// ```
pub fn normalize_number(s: &str) -> Result<String, CharsetViolation> {
    let narrow: String = s.chars().map(fold_width).collect();
    if narrow.chars().all(|c| c.is_ascii_digit()) {
        Ok(narrow)
    } else {
        Err(CharsetViolation { value: narrow, allowed: NUMBER_PATTERN })
    }
}

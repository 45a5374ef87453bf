//! Display-string construction.

use crate::classify::TypeVariant;

/// Renders a value as decimal with digits grouped in thousands.
///
/// The separator is always `,`; there is no locale variation.
///
/// # Examples
///
/// ```rust
/// use numscope::group_digits;
///
/// assert_eq!(group_digits(0), "0");
/// assert_eq!(group_digits(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn group_digits(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Builds the final display string for a reconstructed value.
///
/// Plain-shaped variants render as the grouped decimal alone; bounded-shaped
/// ones are prefixed with their declared range as `[min, max] value`. This
/// never fails: only already-masked values of supported widths reach it.
#[must_use]
pub fn display_string(value: u128, variant: &TypeVariant) -> String {
    match variant.bounds() {
        Some(bounds) => format!("[{}, {}] {}", bounds.min, bounds.max, group_digits(value)),
        None => group_digits(value),
    }
}

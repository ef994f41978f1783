//! Transaction amount normalization
//!
//! The amount field (tag `54`) carries the amount as ASCII digits with
//! exactly two fractional digits. Normalization pads a short fraction with
//! trailing zeros and truncates a long one; it never rounds, so the encoded
//! amount is never larger than what the caller authorized.

use crate::error::EncodeError;
use crate::field::Field;

/// Tag for the transaction amount field
pub const TAG_AMOUNT: &str = "54";

/// Normalize a decimal string to exactly two fractional digits
///
/// - no `.` present: `.00` is appended
/// - empty fraction: becomes `00`
/// - one digit: padded with a trailing `0`
/// - more than two digits: truncated to two, without rounding
///
/// # Example
///
/// ```rust
/// use promptpay_emv::format_amount;
///
/// assert_eq!(format_amount("5"), "5.00");
/// assert_eq!(format_amount("5.1"), "5.10");
/// assert_eq!(format_amount("5.999"), "5.99");
/// assert_eq!(format_amount("1.00"), "1.00");
/// ```
pub fn format_amount(value: &str) -> String {
    match value.split_once('.') {
        None => format!("{value}.00"),
        Some((whole, fraction)) => {
            let fraction = match fraction.len() {
                0 => "00".to_string(),
                1 => format!("{fraction}0"),
                2 => fraction.to_string(),
                _ => fraction[..2].to_string(),
            };
            format!("{whole}.{fraction}")
        }
    }
}

/// Render an amount as the tag `54` field
///
/// The amount is formatted to a fixed 2-decimal string, normalized by
/// [`format_amount`], and wrapped as a TLV field. Range policy (upper
/// limits, precision rules) belongs to the calling layer; this only refuses
/// values that cannot be rendered at all.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidAmount`] for NaN, infinite, or negative
/// amounts.
///
/// # Example
///
/// ```rust
/// use promptpay_emv::amount_field;
///
/// let field = amount_field(100.0).unwrap();
/// assert_eq!(field.encode().unwrap(), "5406100.00");
/// ```
pub fn amount_field(amount: f64) -> Result<Field, EncodeError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(EncodeError::InvalidAmount(amount.to_string()));
    }

    let fixed = format!("{amount:.2}");
    Ok(Field::new(TAG_AMOUNT, format_amount(&fixed)))
}

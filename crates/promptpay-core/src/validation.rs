//! Request validation
//!
//! Caller-side policy checks performed before a request reaches the
//! encoder. The encoder itself only refuses values it cannot render; the
//! business limits live here.

use crate::types::GenerateRequest;
use thiserror::Error;

/// Largest amount accepted by the generate endpoint
pub const MAX_AMOUNT: f64 = 2_000_000_000_000_000.0;

/// Errors that can occur during request validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Amount must be a finite number, got {0}")]
    AmountNotFinite(f64),

    #[error("Amount must be greater than 0 and at most 2,000,000,000,000,000, got {0}")]
    AmountOutOfRange(f64),

    #[error("Amount must have at most two decimal places, got {0}")]
    AmountPrecision(f64),

    #[error("Empty biller ID")]
    EmptyBillerId,

    #[error("Empty merchant name")]
    EmptyMerchantName,
}

/// Validate a generate request
///
/// # Errors
///
/// Returns `ValidationError` if the request is invalid.
///
/// # Example
///
/// ```ignore
/// use promptpay_core::{validate_request, GenerateRequest};
///
/// let request: GenerateRequest = serde_json::from_str(json)?;
/// validate_request(&request)?;
/// ```
pub fn validate_request(request: &GenerateRequest) -> Result<(), ValidationError> {
    if request.biller_id.is_empty() {
        return Err(ValidationError::EmptyBillerId);
    }
    if request.merchant_name.is_empty() {
        return Err(ValidationError::EmptyMerchantName);
    }

    validate_amount(request.amount)
}

/// Validate an amount against the endpoint policy
///
/// The amount must be finite, greater than zero, within [`MAX_AMOUNT`],
/// and carry no more than two decimal places.
pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::AmountNotFinite(amount));
    }

    if amount <= 0.0 || amount > MAX_AMOUNT {
        return Err(ValidationError::AmountOutOfRange(amount));
    }

    if amount != (amount * 100.0).floor() / 100.0 {
        return Err(ValidationError::AmountPrecision(amount));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_amounts() {
        for amount in [0.01, 1.0, 100.25, 999999.99, MAX_AMOUNT] {
            assert_eq!(validate_amount(amount), Ok(()), "{amount}");
        }
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert_eq!(validate_amount(0.0), Err(ValidationError::AmountOutOfRange(0.0)));
        assert!(validate_amount(-5.0).is_err());
    }

    #[test]
    fn test_above_limit_rejected() {
        assert!(matches!(
            validate_amount(MAX_AMOUNT * 2.0),
            Err(ValidationError::AmountOutOfRange(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            validate_amount(f64::NAN),
            Err(ValidationError::AmountNotFinite(_))
        ));
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn test_three_decimal_places_rejected() {
        assert!(matches!(
            validate_amount(1.125),
            Err(ValidationError::AmountPrecision(_))
        ));
    }
}

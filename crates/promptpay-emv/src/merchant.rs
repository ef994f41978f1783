//! Merchant account information block
//!
//! Bill-payment payloads carry the merchant identity as a nested TLV block
//! under tag `30`: the fixed bill-payment application identifier, the
//! biller ID, and two reference strings, each as its own sub-field. The
//! outer length prefix covers the whole nested encoding.

use crate::error::EncodeError;
use crate::field::Field;

/// Outer tag of the merchant account information block
pub const TAG_MERCHANT_ACCOUNT: &str = "30";

/// Application identifier of the Thai bill-payment scheme
pub const BILL_PAYMENT_AID: &str = "A000000677010112";

/// Build the nested merchant account field
///
/// The sub-fields are encoded in protocol order (`00` AID, `01` biller ID,
/// `02` reference 1, `03` reference 2) and the concatenation is wrapped as
/// a single outer field whose length prefix reflects the total inner byte
/// length. References are expected to be upper-cased already; no case
/// transformation happens here.
///
/// Empty references are suppressed, so a payload without a second reference
/// simply omits sub-field `03`.
///
/// # Errors
///
/// Returns [`EncodeError::FieldTooLong`] if any sub-field value, or the
/// assembled inner block, exceeds the 99-byte TLV limit.
///
/// # Example
///
/// ```rust
/// use promptpay_emv::merchant_account_field;
///
/// let encoded = merchant_account_field("123456789012345", "REF1", "REF2").unwrap();
/// assert_eq!(
///     encoded,
///     "30550016A00000067701011201151234567890123450204REF10304REF2"
/// );
/// ```
pub fn merchant_account_field(
    biller_id: &str,
    reference1: &str,
    reference2: &str,
) -> Result<String, EncodeError> {
    let mut inner = String::new();
    inner.push_str(&Field::new("00", BILL_PAYMENT_AID).encode()?);
    inner.push_str(&Field::new("01", biller_id).encode()?);
    inner.push_str(&Field::new("02", reference1).encode()?);
    inner.push_str(&Field::new("03", reference2).encode()?);

    Field::new(TAG_MERCHANT_ACCOUNT, inner).encode()
}

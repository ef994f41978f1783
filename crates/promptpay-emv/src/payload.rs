//! Bill-payment payload assembly
//!
//! Produces the complete QR payload string: an ordered concatenation of TLV
//! fields terminated by the CRC-16 checksum. Field order is protocol-fixed;
//! the only branch is the one-time / reusable selector on the
//! point-of-initiation field.

use crate::amount::amount_field;
use crate::checksum::{checksum_hex, CHECKSUM_MARKER};
use crate::error::EncodeError;
use crate::field::Field;
use crate::merchant::merchant_account_field;

const TAG_PAYLOAD_FORMAT: &str = "00";
const TAG_POI_METHOD: &str = "01";
const TAG_CURRENCY: &str = "53";
const TAG_COUNTRY: &str = "58";
const TAG_MERCHANT_NAME: &str = "59";
const TAG_TERMINAL_ID: &str = "07";

const PAYLOAD_FORMAT_INDICATOR: &str = "01";
/// Point-of-initiation value for a one-time (dynamic) code
const POI_DYNAMIC: &str = "12";
/// Point-of-initiation value for a reusable (static) code
const POI_STATIC: &str = "11";
/// ISO 4217 numeric code for Thai baht
const CURRENCY_THB: &str = "764";
const COUNTRY_TH: &str = "TH";

/// Inputs of a bill-payment QR payload
///
/// The caller supplies already-validated business fields; see
/// [`BillPayment::encode`] for the assembly contract.
#[derive(Debug, Clone, PartialEq)]
pub struct BillPayment {
    pub biller_id: String,
    pub merchant_name: String,
    pub reference1: String,
    pub reference2: String,
    pub amount: f64,
    /// `true` renders a dynamic (one-time) code, `false` a static one
    pub onetime: bool,
}

impl BillPayment {
    /// Assemble the full payload string
    ///
    /// Fields are emitted in protocol order: payload format indicator,
    /// point-of-initiation method, merchant account block, currency,
    /// amount, country, merchant name, terminal ID (always empty, so
    /// always suppressed), then the `6304` checksum marker and the
    /// checksum itself. References are upper-cased here, before the
    /// merchant block is built.
    ///
    /// # Errors
    ///
    /// Any sub-step failure ([`EncodeError::InvalidAmount`],
    /// [`EncodeError::FieldTooLong`]) aborts the whole generation; no
    /// partial payload is ever returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use promptpay_emv::BillPayment;
    ///
    /// let payload = BillPayment {
    ///     biller_id: "123456789012345".to_string(),
    ///     merchant_name: "TESTSHOP".to_string(),
    ///     reference1: "REF1".to_string(),
    ///     reference2: "REF2".to_string(),
    ///     amount: 100.0,
    ///     onetime: false,
    /// }
    /// .encode()
    /// .unwrap();
    ///
    /// assert!(payload.starts_with("000201010211"));
    /// assert_eq!(payload.len(), 114);
    /// ```
    pub fn encode(&self) -> Result<String, EncodeError> {
        let poi = if self.onetime { POI_DYNAMIC } else { POI_STATIC };

        let mut payload = String::new();
        payload.push_str(&Field::new(TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT_INDICATOR).encode()?);
        payload.push_str(&Field::new(TAG_POI_METHOD, poi).encode()?);
        payload.push_str(&merchant_account_field(
            &self.biller_id,
            &self.reference1.to_uppercase(),
            &self.reference2.to_uppercase(),
        )?);
        payload.push_str(&Field::new(TAG_CURRENCY, CURRENCY_THB).encode()?);
        payload.push_str(&amount_field(self.amount)?.encode()?);
        payload.push_str(&Field::new(TAG_COUNTRY, COUNTRY_TH).encode()?);
        payload.push_str(&Field::new(TAG_MERCHANT_NAME, self.merchant_name.clone()).encode()?);
        payload.push_str(&Field::new(TAG_TERMINAL_ID, "").encode()?);
        payload.push_str(CHECKSUM_MARKER);

        let crc = checksum_hex(&payload);
        if crc.len() != 4 || !crc.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EncodeError::ChecksumComputationFailure(crc));
        }
        payload.push_str(&crc);

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_payment() -> BillPayment {
        BillPayment {
            biller_id: "123456789012345".to_string(),
            merchant_name: "TESTSHOP".to_string(),
            reference1: "REF1".to_string(),
            reference2: "REF2".to_string(),
            amount: 100.0,
            onetime: false,
        }
    }

    #[test]
    fn test_full_payload() {
        let payload = test_payment().encode().unwrap();
        assert_eq!(
            payload,
            "00020101021130550016A0000006770101120115123456789012345\
             0204REF10304REF253037645406100.005802TH5908TESTSHOP630496B3"
        );
    }

    #[test]
    fn test_static_vs_dynamic_selector() {
        let static_payload = test_payment().encode().unwrap();
        assert!(static_payload.starts_with("000201010211"));

        let dynamic_payload = BillPayment {
            onetime: true,
            ..test_payment()
        }
        .encode()
        .unwrap();
        assert!(dynamic_payload.starts_with("000201010212"));
    }

    #[test]
    fn test_determinism() {
        let payment = test_payment();
        assert_eq!(payment.encode().unwrap(), payment.encode().unwrap());
    }

    #[test]
    fn test_checksum_suffix_shape() {
        let payload = test_payment().encode().unwrap();
        let marker = payload.rfind("6304").unwrap();
        let suffix = &payload[marker + 4..];
        assert_eq!(suffix.len(), 4);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_terminal_id_always_suppressed() {
        let payload = test_payment().encode().unwrap();
        assert!(!payload.contains("0700"));
    }

    #[test]
    fn test_references_upper_cased() {
        let payload = BillPayment {
            reference1: "ref1".to_string(),
            reference2: "rEf2".to_string(),
            ..test_payment()
        }
        .encode()
        .unwrap();
        assert!(payload.contains("0204REF1"));
        assert!(payload.contains("0304REF2"));
    }

    #[test]
    fn test_invalid_amount_aborts_whole_payload() {
        let result = BillPayment {
            amount: f64::NAN,
            ..test_payment()
        }
        .encode();
        assert!(matches!(result, Err(EncodeError::InvalidAmount(_))));
    }

    #[test]
    fn test_oversized_merchant_name_aborts() {
        let result = BillPayment {
            merchant_name: "M".repeat(100),
            ..test_payment()
        }
        .encode();
        assert!(matches!(
            result,
            Err(EncodeError::FieldTooLong { tag: "59", .. })
        ));
    }
}

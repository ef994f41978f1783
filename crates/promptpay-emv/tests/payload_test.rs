//! End-to-end tests for bill-payment payload assembly

use promptpay_emv::{BillPayment, Field};

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

/// Walk a TLV string and return (tag, value) pairs, panicking on any
/// length-prefix inconsistency
fn parse_tlv(payload: &str) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    let mut rest = payload;
    while !rest.is_empty() {
        let tag = &rest[..2];
        let len: usize = rest[2..4].parse().expect("2-digit decimal length");
        let value = &rest[4..4 + len];
        fields.push((tag.to_string(), value.to_string()));
        rest = &rest[4 + len..];
    }
    fields
}

mod assembly {
    use super::*;

    #[test]
    fn test_payload_starts_with_format_and_initiation_fields() {
        let payload = test_payment().encode().unwrap();
        assert!(payload.starts_with("000201010211"));
    }

    #[test]
    fn test_payload_is_scannable_tlv_end_to_end() {
        let payload = test_payment().encode().unwrap();
        let fields = parse_tlv(&payload);

        let tags: Vec<&str> = fields.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tags, ["00", "01", "30", "53", "54", "58", "59", "63"]);

        // The checksum field carries exactly the 4 hex digits
        let (_, crc) = fields.last().unwrap();
        assert_eq!(crc.len(), 4);
        assert!(crc.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_total_length_is_sum_of_fields_plus_checksum() {
        let payload = test_payment().encode().unwrap();
        let fields = parse_tlv(&payload);

        let field_bytes: usize = fields.iter().map(|(_, v)| 4 + v.len()).sum();
        assert_eq!(payload.len(), field_bytes);

        // Everything before the checksum value, plus the 4 checksum digits
        let marker = payload.rfind("6304").unwrap();
        assert_eq!(payload.len(), marker + 4 + 4);
    }

    #[test]
    fn test_nested_merchant_block_parses() {
        let payload = test_payment().encode().unwrap();
        let fields = parse_tlv(&payload);

        let (_, merchant) = fields.iter().find(|(t, _)| t == "30").unwrap();
        let inner = parse_tlv(merchant);
        assert_eq!(
            inner,
            [
                ("00".to_string(), "A000000677010112".to_string()),
                ("01".to_string(), "123456789012345".to_string()),
                ("02".to_string(), "REF1".to_string()),
                ("03".to_string(), "REF2".to_string()),
            ]
        );
    }

    #[test]
    fn test_repeated_calls_are_byte_identical() {
        let payment = test_payment();
        let first = payment.encode().unwrap();
        for _ in 0..10 {
            assert_eq!(payment.encode().unwrap(), first);
        }
    }
}

mod amounts {
    use super::*;

    #[test]
    fn test_amount_renders_with_two_decimals() {
        for (amount, expected) in [(100.0, "100.00"), (0.5, "0.50"), (1234.56, "1234.56")] {
            let payload = BillPayment {
                amount,
                ..test_payment()
            }
            .encode()
            .unwrap();
            let fields = parse_tlv(&payload);
            let (_, value) = fields.iter().find(|(t, _)| t == "54").unwrap();
            assert_eq!(value, expected);
        }
    }

    #[test]
    fn test_amount_field_changes_checksum() {
        let a = test_payment().encode().unwrap();
        let b = BillPayment {
            amount: 100.01,
            ..test_payment()
        }
        .encode()
        .unwrap();
        assert_ne!(&a[a.len() - 4..], &b[b.len() - 4..]);
    }
}

mod omission {
    use super::*;

    #[test]
    fn test_empty_field_emits_nothing_for_every_tag() {
        for tag in ["00", "01", "07", "30", "54", "62"] {
            assert_eq!(Field::new(tag, "").encode().unwrap(), "");
        }
    }

    #[test]
    fn test_empty_references_shrink_merchant_block() {
        let payload = BillPayment {
            reference1: String::new(),
            reference2: String::new(),
            ..test_payment()
        }
        .encode()
        .unwrap();

        let fields = parse_tlv(&payload);
        let (_, merchant) = fields.iter().find(|(t, _)| t == "30").unwrap();
        let inner_tags: Vec<String> = parse_tlv(merchant).into_iter().map(|(t, _)| t).collect();
        assert_eq!(inner_tags, ["00", "01"]);
    }
}

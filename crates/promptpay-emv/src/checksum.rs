//! CRC-16/CCITT-FALSE payload checksum
//!
//! The payload is terminated by a CRC-16/CCITT-FALSE checksum (polynomial
//! `0x1021`, initial register `0xFFFF`, no reflection, no final XOR)
//! computed over the UTF-8 bytes of everything before it, including the
//! literal `6304` checksum tag and length. The `crc` crate catalogs this
//! variant as `CRC_16_IBM_3740`.

use crc::{Crc, CRC_16_IBM_3740};

/// Checksum tag and length marker, part of the checksummed bytes
pub const CHECKSUM_MARKER: &str = "6304";

const CRC16_CCITT_FALSE: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Compute the raw CRC-16/CCITT-FALSE of a payload prefix
///
/// The prefix must already end with the [`CHECKSUM_MARKER`]; the protocol
/// checksums the marker but not the checksum value itself.
pub fn checksum(payload_prefix: &str) -> u16 {
    CRC16_CCITT_FALSE.checksum(payload_prefix.as_bytes())
}

/// Compute the checksum rendered as exactly 4 uppercase hex digits
///
/// The rendering is always zero-padded: a checksum below `0x1000` written
/// with fewer digits would shorten the payload and be rejected by scanners.
///
/// # Example
///
/// ```rust
/// use promptpay_emv::checksum_hex;
///
/// assert_eq!(checksum_hex("123456789"), "29B1");
/// ```
pub fn checksum_hex(payload_prefix: &str) -> String {
    format!("{:04X}", checksum(payload_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_vector() {
        // Standard check value for CRC-16/CCITT-FALSE
        assert_eq!(checksum("123456789"), 0x29B1);
        assert_eq!(checksum_hex("123456789"), "29B1");
    }

    #[test]
    fn test_low_checksum_is_zero_padded() {
        assert_eq!(checksum("B4"), 0x0076);
        assert_eq!(checksum_hex("B4"), "0076");
    }

    #[test]
    fn test_empty_input_yields_initial_register() {
        assert_eq!(checksum(""), 0xFFFF);
    }

    #[test]
    fn test_determinism() {
        let input = "00020101021153037645802TH6304";
        assert_eq!(checksum(input), checksum(input));
    }

    #[test]
    fn test_avalanche_on_single_byte_flips() {
        let prefix = "00020101021253037645406100.005802TH6304";
        let reference = checksum_hex(prefix);

        for i in 0..prefix.len() {
            let mut bytes = prefix.as_bytes().to_vec();
            bytes[i] ^= 0x01;
            let flipped = String::from_utf8(bytes).unwrap();
            assert_ne!(
                checksum_hex(&flipped),
                reference,
                "flip at byte {i} left the checksum unchanged"
            );
        }
    }
}

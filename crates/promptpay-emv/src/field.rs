//! Tag-Length-Value field encoding
//!
//! Every unit of an EMVCo-style payload is a `tag + length + value` triple:
//! a fixed 2-digit tag, the decimal byte length of the value rendered as
//! exactly two digits, then the value itself. Fields with empty values are
//! suppressed entirely rather than emitted with length `00`.

use crate::error::EncodeError;

/// Maximum value length representable by the 2-digit length prefix.
pub const MAX_VALUE_LEN: usize = 99;

/// A single TLV unit with a protocol-fixed 2-digit tag.
///
/// Fields are inert until serialized by [`Field::encode`], so a payload can
/// be assembled as an ordered list of typed values and rendered in one
/// place.
///
/// # Example
///
/// ```rust
/// use promptpay_emv::Field;
///
/// let field = Field::new("59", "TESTSHOP");
/// assert_eq!(field.encode().unwrap(), "5908TESTSHOP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    tag: &'static str,
    value: String,
}

impl Field {
    /// Create a field with the given tag and value
    pub fn new(tag: &'static str, value: impl Into<String>) -> Self {
        debug_assert!(
            tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit()),
            "TLV tags are exactly two ASCII digits"
        );
        Self {
            tag,
            value: value.into(),
        }
    }

    /// The field's 2-digit tag
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The field's raw value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Serialize as `tag + 2-digit length + value`
    ///
    /// An empty value yields an empty string: the field is suppressed, not
    /// emitted with length `00`. A scanner reading a zero-length field would
    /// misparse everything after it.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::FieldTooLong`] when the value's byte length
    /// does not fit the 2-digit length prefix (100 bytes or more). A wider
    /// length rendering would shift every following byte and break any
    /// conforming decoder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use promptpay_emv::Field;
    ///
    /// assert_eq!(Field::new("53", "764").encode().unwrap(), "5303764");
    /// assert_eq!(Field::new("07", "").encode().unwrap(), "");
    /// ```
    pub fn encode(&self) -> Result<String, EncodeError> {
        if self.value.is_empty() {
            return Ok(String::new());
        }

        let len = self.value.len();
        if len > MAX_VALUE_LEN {
            return Err(EncodeError::FieldTooLong { tag: self.tag, len });
        }

        Ok(format!("{}{:02}{}", self.tag, len, self.value))
    }
}

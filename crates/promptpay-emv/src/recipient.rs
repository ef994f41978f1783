//! Recipient identifier classification
//!
//! PromptPay credit-transfer identifiers are distinguished purely by length
//! and leading character, in a fixed precedence order:
//!
//! 1. 10 characters starting with `0`: phone number (tag `01`)
//! 2. 13 characters: national ID or tax ID (tag `02`)
//! 3. 15 characters: e-wallet ID (tag `03`)
//! 4. anything else: bank account (tag `04`)
//!
//! Phone numbers are rewritten to international form: the leading `0` is
//! dropped and the `0066` country prefix is substituted. No other variant
//! alters its value. Classification assumes digit-only input; callers own
//! that pre-validation.
//!
//! This module is self-contained: the bill-payment assembler in
//! [`crate::payload`] does not consume it, since the `01`–`04` tag space
//! here belongs to the credit-transfer application block.

use crate::field::Field;

/// Country calling code prefix substituted into phone-number identifiers
const PHONE_COUNTRY_PREFIX: &str = "0066";

/// The recipient identifier variants, in classification precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientKind {
    PhoneNumber,
    NationalOrTaxId,
    EWallet,
    BankAccount,
}

impl RecipientKind {
    /// The sub-tag this variant is encoded under
    pub fn tag(self) -> &'static str {
        match self {
            RecipientKind::PhoneNumber => "01",
            RecipientKind::NationalOrTaxId => "02",
            RecipientKind::EWallet => "03",
            RecipientKind::BankAccount => "04",
        }
    }
}

/// Classify a raw identifier by length and leading character
///
/// # Example
///
/// ```rust
/// use promptpay_emv::{classify_recipient, RecipientKind};
///
/// assert_eq!(classify_recipient("0812345678"), RecipientKind::PhoneNumber);
/// assert_eq!(classify_recipient("1234567890123"), RecipientKind::NationalOrTaxId);
/// assert_eq!(classify_recipient("123456789012345"), RecipientKind::EWallet);
/// assert_eq!(classify_recipient("9876543210"), RecipientKind::BankAccount);
/// ```
pub fn classify_recipient(raw: &str) -> RecipientKind {
    if raw.len() == 10 && raw.starts_with('0') {
        RecipientKind::PhoneNumber
    } else if raw.len() == 13 {
        RecipientKind::NationalOrTaxId
    } else if raw.len() == 15 {
        RecipientKind::EWallet
    } else {
        RecipientKind::BankAccount
    }
}

/// Produce the tagged field for a recipient identifier
///
/// Phone numbers have their leading `0` replaced by the `0066` country
/// prefix; every other variant keeps its value unchanged. An empty
/// identifier classifies as a bank account and encodes to the empty string
/// per the field-suppression rule.
///
/// # Example
///
/// ```rust
/// use promptpay_emv::recipient_field;
///
/// let field = recipient_field("0812345678");
/// assert_eq!(field.encode().unwrap(), "01130066812345678");
/// ```
pub fn recipient_field(raw: &str) -> Field {
    let kind = classify_recipient(raw);
    let value = match kind {
        RecipientKind::PhoneNumber => format!("{PHONE_COUNTRY_PREFIX}{}", &raw[1..]),
        _ => raw.to_string(),
    };
    Field::new(kind.tag(), value)
}

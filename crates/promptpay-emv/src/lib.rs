//! # PromptPay EMV
//!
//! Deterministic encoder for Thai PromptPay bill-payment QR payloads in the
//! EMVCo Tag-Length-Value style.
//!
//! This crate provides:
//! - Typed TLV [`Field`] values with a single shared encoder
//! - Amount normalization to the fixed 2-decimal wire form
//! - Recipient identifier classification for credit-transfer codes
//! - Nested merchant account block assembly
//! - CRC-16/CCITT-FALSE checksum computation and rendering
//! - Full [`BillPayment`] payload assembly
//!
//! The encoder is pure and synchronous: no I/O, no shared state, no
//! logging. Identical inputs always produce byte-identical payloads, so it
//! is safe to call concurrently from any number of tasks.
//!
//! ## Example
//!
//! ```rust
//! use promptpay_emv::BillPayment;
//!
//! let payload = BillPayment {
//!     biller_id: "010753600031508".to_string(),
//!     merchant_name: "ACME HARDWARE".to_string(),
//!     reference1: "INV2024001".to_string(),
//!     reference2: "C1".to_string(),
//!     amount: 150.75,
//!     onetime: true,
//! }
//! .encode()?;
//!
//! // The payload ends with the 6304 marker and 4 uppercase hex digits
//! assert_eq!(&payload[payload.len() - 8..payload.len() - 4], "6304");
//! # Ok::<(), promptpay_emv::EncodeError>(())
//! ```

mod amount;
mod checksum;
mod error;
mod field;
mod merchant;
mod payload;
mod recipient;

pub use amount::{amount_field, format_amount, TAG_AMOUNT};
pub use checksum::{checksum, checksum_hex, CHECKSUM_MARKER};
pub use error::EncodeError;
pub use field::{Field, MAX_VALUE_LEN};
pub use merchant::{merchant_account_field, BILL_PAYMENT_AID, TAG_MERCHANT_ACCOUNT};
pub use payload::BillPayment;
pub use recipient::{classify_recipient, recipient_field, RecipientKind};

//! Wire-facing types for the PromptPay QR service
//!
//! Field names follow the JSON contract of the generate endpoint
//! (camelCase), so these types deserialize request bodies directly.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scheme label recorded on every generated code
pub const QR_KIND_PROMPTPAY: &str = "promptpay";

/// Body of a generate request
///
/// `biller_id`, `merchant_name`, the references, `amount`, and `onetime`
/// feed the encoder; the transaction and recipient metadata is carried
/// through onto the resulting [`QrRecord`] untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub biller_id: String,
    pub merchant_name: String,
    pub reference1: String,
    pub reference2: String,
    pub amount: f64,
    pub onetime: bool,

    #[serde(default)]
    pub tx_id: String,

    #[serde(default)]
    pub recipient_id: String,

    #[serde(default)]
    pub recipient_type: String,

    #[serde(default)]
    pub remark: String,

    /// Expiration time as a unix timestamp; zero means no expiry
    #[serde(default)]
    pub expire: i64,
}

/// A generated QR code and the request context it was produced from
///
/// This is the response shape of the generate endpoint. Persistence of
/// generated records is owned by deployments, not by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QrRecord {
    pub id: Uuid,
    pub tx_id: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub recipient_id: String,
    pub recipient_type: String,
    pub merchant_name: String,
    pub reference1: String,
    pub reference2: String,
    pub amount: f64,
    pub onetime: bool,
    pub remark: String,

    /// Creation time as unix seconds
    pub created_at: i64,

    /// The assembled QR payload string
    pub qr_code: String,

    pub expire: i64,
}

impl QrRecord {
    /// Build a record from a validated request and its encoded payload
    ///
    /// Assigns a fresh v4 id and stamps the current time.
    pub fn from_request(request: &GenerateRequest, qr_code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            tx_id: request.tx_id.clone(),
            kind: QR_KIND_PROMPTPAY.to_string(),
            recipient_id: request.recipient_id.clone(),
            recipient_type: request.recipient_type.clone(),
            merchant_name: request.merchant_name.clone(),
            reference1: request.reference1.clone(),
            reference2: request.reference2.clone(),
            amount: request.amount,
            onetime: request.onetime,
            remark: request.remark.clone(),
            created_at: Utc::now().timestamp(),
            qr_code,
            expire: request.expire,
        }
    }
}

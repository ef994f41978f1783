//! QR server request handlers

use axum::Json;
use promptpay_core::QrRecord;
use promptpay_emv::BillPayment;
use promptpay_http::{GenerateRequestExtractor, QrHttpError, QrRecordJson};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Banner for the root path
pub async fn root() -> &'static str {
    "QR generator service up!"
}

/// Generate endpoint: encode the payload and return the created record
pub async fn generate(
    GenerateRequestExtractor(request): GenerateRequestExtractor,
) -> Result<QrRecordJson, QrHttpError> {
    tracing::info!(
        tx_id = %request.tx_id,
        merchant = %request.merchant_name,
        onetime = request.onetime,
        "Generating bill-payment QR"
    );

    let payload = BillPayment {
        biller_id: request.biller_id.clone(),
        merchant_name: request.merchant_name.clone(),
        reference1: request.reference1.clone(),
        reference2: request.reference2.clone(),
        amount: request.amount,
        onetime: request.onetime,
    }
    .encode()?;

    Ok(QrRecordJson(QrRecord::from_request(&request, payload)))
}

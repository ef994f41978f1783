//! Response helpers for the QR HTTP transport

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use promptpay_core::QrRecord;

/// Wrapper returning a generated record as a 200 JSON body
///
/// # Example
///
/// ```ignore
/// use promptpay_http::QrRecordJson;
/// use promptpay_core::QrRecord;
///
/// async fn handler() -> QrRecordJson {
///     let record = QrRecord { /* ... */ };
///     QrRecordJson(record)
/// }
/// ```
pub struct QrRecordJson(pub QrRecord);

impl IntoResponse for QrRecordJson {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

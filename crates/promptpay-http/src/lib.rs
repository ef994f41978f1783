//! # PromptPay HTTP Transport
//!
//! HTTP transport layer for the PromptPay QR service.
//!
//! This crate provides:
//! - An axum extractor that parses and validates generate requests
//! - Response helpers and error-to-status mapping
//! - A reqwest-based client for calling a QR service
//!
//! ## Server Example
//!
//! ```ignore
//! use axum::{routing::post, Router};
//! use promptpay_http::{GenerateRequestExtractor, QrHttpError, QrRecordJson};
//! use promptpay_core::QrRecord;
//! use promptpay_emv::BillPayment;
//!
//! async fn generate(
//!     GenerateRequestExtractor(request): GenerateRequestExtractor,
//! ) -> Result<QrRecordJson, QrHttpError> {
//!     let payload = BillPayment {
//!         biller_id: request.biller_id.clone(),
//!         merchant_name: request.merchant_name.clone(),
//!         reference1: request.reference1.clone(),
//!         reference2: request.reference2.clone(),
//!         amount: request.amount,
//!         onetime: request.onetime,
//!     }
//!     .encode()?;
//!     Ok(QrRecordJson(QrRecord::from_request(&request, payload)))
//! }
//!
//! let app = Router::new().route("/v1/generate", post(generate));
//! ```
//!
//! ## Client Example
//!
//! ```ignore
//! use promptpay_http::QrClient;
//! use promptpay_core::GenerateRequest;
//!
//! let client = QrClient::new("http://localhost:8080");
//! let request = GenerateRequest { /* ... */ };
//! let record = client.generate(request).await?;
//! ```

mod client;
mod error;
mod extractors;
mod response;

pub use client::QrClient;
pub use error::{ErrorResponse, QrHttpError};
pub use extractors::GenerateRequestExtractor;
pub use response::QrRecordJson;

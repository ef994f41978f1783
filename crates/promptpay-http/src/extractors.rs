//! Axum extractors for generate requests

use crate::error::QrHttpError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use promptpay_core::{validate_request, GenerateRequest};

/// Axum extractor for validated generate requests
///
/// Parses the request body as JSON, deserializes it to a
/// [`GenerateRequest`], and runs the caller-side validation policy, so
/// handlers only ever see well-formed requests.
///
/// # Example
///
/// ```ignore
/// use axum::{routing::post, Router};
/// use promptpay_http::GenerateRequestExtractor;
///
/// async fn handler(GenerateRequestExtractor(request): GenerateRequestExtractor) {
///     // request is a validated GenerateRequest
/// }
///
/// let app = Router::new().route("/v1/generate", post(handler));
/// ```
pub struct GenerateRequestExtractor(pub GenerateRequest);

#[async_trait]
impl<S> FromRequest<S> for GenerateRequestExtractor
where
    S: Send + Sync,
{
    type Rejection = QrHttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(request) = Json::<GenerateRequest>::from_request(req, state)
            .await
            .map_err(|e| QrHttpError::ParseError(e.to_string()))?;

        validate_request(&request)?;

        Ok(GenerateRequestExtractor(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_type_exists() {
        // Compile-time check that the type exists
        fn _assert_extractor(_: GenerateRequestExtractor) {}
    }
}

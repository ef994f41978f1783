//! Reqwest-based client for the QR service

use crate::error::QrHttpError;
use promptpay_core::{GenerateRequest, QrRecord};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for a PromptPay QR service
///
/// # Example
///
/// ```ignore
/// use promptpay_http::QrClient;
/// use promptpay_core::GenerateRequest;
///
/// let client = QrClient::new("http://localhost:8080");
/// let request = GenerateRequest { /* ... */ };
/// let record = client.generate(request).await?;
/// ```
pub struct QrClient {
    client: Client,
    base_url: String,
}

impl QrClient {
    /// Create a new client with the given base URL
    ///
    /// The base URL should not include a trailing slash. The client
    /// appends `/v1/generate` for generate requests.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap(),
            base_url: base_url.into(),
        }
    }

    /// Create a new client with custom settings
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate a QR code
    ///
    /// Posts the request to `{base_url}/v1/generate` and returns the
    /// created record.
    pub async fn generate(&self, request: GenerateRequest) -> Result<QrRecord, QrHttpError> {
        self.generate_at("v1/generate", request).await
    }

    /// Generate a QR code via a specific endpoint
    ///
    /// Posts the request to `{base_url}/{path}` and returns the created
    /// record.
    pub async fn generate_at(
        &self,
        path: &str,
        request: GenerateRequest,
    ) -> Result<QrRecord, QrHttpError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(QrHttpError::RequestError)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(QrHttpError::ServerError(format!(
                "{status}: {body}"
            )));
        }

        let record: QrRecord = response.json().await.map_err(QrHttpError::RequestError)?;

        Ok(record)
    }
}

impl Default for QrClient {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = QrClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_default_client() {
        let client = QrClient::default();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_custom_base_url() {
        let client = QrClient::new("https://api.example.com");
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}

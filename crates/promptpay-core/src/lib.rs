//! # PromptPay Core
//!
//! Request types and validation for the PromptPay QR service.
//!
//! This crate provides:
//! - Wire-facing types for the generate endpoint
//! - Request validation (amount policy, required fields)
//!
//! ## Example
//!
//! ```rust,ignore
//! use promptpay_core::{validate_request, GenerateRequest};
//!
//! // Parse a request body
//! let request: GenerateRequest = serde_json::from_str(json)?;
//!
//! // Validate
//! validate_request(&request)?;
//! ```

pub mod error;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use error::*;
pub use types::*;
pub use validation::*;

//! Oracle Provider Strategy Pattern
//!
//! Defines a common interface for generative-text backends, allowing the
//! console to work with any service without code changes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use beacon_core::oracle::{InquiryRequest, Oracle};
//!
//! let oracle = GeminiOracle::from_env();
//! let reply = oracle.generate(&request).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single outbound inquiry to the generative-text service
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InquiryRequest {
    /// Model identifier (e.g., "gemini-3-flash-preview")
    pub model: String,

    /// Fixed persona instruction sent as the system prompt
    pub system_instruction: String,

    /// The user's trimmed free-text prompt
    pub prompt: String,
}

/// What the service answered
///
/// `text` is `None` when the reply carried no text at all; callers treat
/// that as a fallback response, not an error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Reply {
    pub text: Option<String>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub const fn empty() -> Self {
        Self { text: None }
    }
}

/// Strategy trait for generative-text backends
///
/// Implement this trait to add support for new services. The dispatcher
/// works exclusively through this interface.
///
/// Futures are `?Send`: the only executor is the single-threaded browser
/// event loop, and wasm transport futures cannot cross threads.
#[async_trait(?Send)]
pub trait Oracle {
    /// Issue one request and await one reply
    async fn generate(&self, request: &InquiryRequest) -> Result<Reply>;
}

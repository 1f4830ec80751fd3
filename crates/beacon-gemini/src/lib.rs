//! # beacon-gemini
//!
//! Oracle backend for the hosted Google Gemini API.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use beacon_gemini::GeminiOracle;
//!
//! let oracle = GeminiOracle::from_env();
//! let dispatcher = InquiryDispatcher::with_defaults(Arc::new(oracle));
//! ```
//!
//! The credential is resolved at call time from the explicit config value or
//! the `GEMINI_API_KEY` / `GOOGLE_API_KEY` environment variables; a missing
//! credential surfaces as an ordinary failed inquiry, never a panic.

pub mod gemini;

pub use gemini::{GeminiConfig, GeminiOracle};

// Re-export core types for convenience
pub use beacon_core::{BeaconError, InquiryDispatcher, InquiryOutcome, Oracle, Reply, Result};

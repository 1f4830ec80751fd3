//! # beacon-core
//!
//! Platform-neutral logic for The Republic Beacon console: the view state
//! machine, the inquiry dispatcher, and the oracle provider seam.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     Console View                           │
//! │  ┌──────────────┐  ┌──────────────┐  ┌─────────────────┐  │
//! │  │ ConsoleState │──│  Inquiry     │──│     Oracle      │  │
//! │  │ (guards,     │  │  Dispatcher  │  │   (Strategy)    │  │
//! │  │  overlays)   │  │              │  │                 │  │
//! │  └──────────────┘  └──────────────┘  └─────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Oracle` trait enables swapping the hosted generative-text backend
//! (Gemini, or a mock in tests) without touching console logic. Everything
//! here is free of I/O and compiles for both native and wasm32 targets.

pub mod console;
pub mod dispatch;
pub mod error;
pub mod oracle;

pub use console::{ConsoleState, Overlay};
pub use dispatch::{InquiryDispatcher, InquiryOptions, InquiryOutcome};
pub use error::{BeaconError, Result};
pub use oracle::{InquiryRequest, Oracle, Reply};

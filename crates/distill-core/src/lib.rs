//! # distill-core
//!
//! Core logic behind the Distill live compression demo.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DemoController                          │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │  Debounce   │  │  DemoState  │  │   Compressor        │  │
//! │  │   Timer     │──│  (tickets)  │──│   (Strategy)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Compressor` trait lets the demo swap between the remote compression
//! service and the local word-scoring heuristic without touching the state
//! machine. `DemoState` is runtime-agnostic so the WASM frontend drives it
//! with browser timers while native code uses [`DemoController`].

pub mod aggressiveness;
pub mod compressor;
pub mod config;
pub mod demo;
pub mod error;
pub mod heuristic;
pub mod tokens;

#[cfg(feature = "runtime")]
pub mod controller;

pub use aggressiveness::Aggressiveness;
pub use compressor::{CompressionOutcome, CompressionRequest, CompressionResponse, Compressor};
pub use config::{DemoConfig, DemoMode};
pub use demo::{CompressionJob, DemoState, Phase, Settle, Ticket};
pub use error::{CompressError, Result};
pub use heuristic::HeuristicCompressor;
pub use tokens::estimate_tokens;

#[cfg(feature = "runtime")]
pub use controller::DemoController;

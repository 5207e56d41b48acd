//! Compressor Strategy Pattern
//!
//! Common interface for everything that can shorten a prompt: the remote
//! compression service and the local heuristic both sit behind it, so the
//! demo controller never cares which one it is talking to.
//!
//! ## Wire format
//!
//! ```text
//! POST /compress_prompt
//! { "context": "...", "rate": 0.9, "use_token_level_filter": true }
//!
//! 200 OK
//! { "compressed_prompt": "...", "origin_tokens": 18, "compressed_tokens": 9 }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::aggressiveness::Aggressiveness;
use crate::error::Result;
use crate::tokens::estimate_tokens;

/// Body of `POST /compress_prompt`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompressionRequest {
    /// Prompt to compress
    pub context: String,

    /// Fraction of the prompt to keep (`1 - aggressiveness`)
    pub rate: f64,

    /// Ask the service for token-level pruning on top of sentence filtering
    #[serde(default = "default_token_level_filter")]
    pub use_token_level_filter: bool,
}

const fn default_token_level_filter() -> bool {
    true
}

impl CompressionRequest {
    pub fn new(context: impl Into<String>, aggressiveness: Aggressiveness) -> Self {
        Self {
            context: context.into(),
            rate: aggressiveness.rate(),
            use_token_level_filter: default_token_level_filter(),
        }
    }
}

/// Body returned by the service. Every field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionResponse {
    #[serde(default)]
    pub compressed_prompt: Option<String>,

    #[serde(default)]
    pub origin_tokens: Option<u32>,

    #[serde(default)]
    pub compressed_tokens: Option<u32>,
}

impl CompressionResponse {
    /// Fill whatever the service left out using the local estimator.
    ///
    /// A zero count is treated like a missing one.
    pub fn reconcile(self, original: &str) -> CompressionOutcome {
        let text = self.compressed_prompt.unwrap_or_default();
        let input_tokens = self
            .origin_tokens
            .filter(|&n| n > 0)
            .unwrap_or_else(|| estimate_tokens(original));
        let output_tokens = self
            .compressed_tokens
            .filter(|&n| n > 0)
            .unwrap_or_else(|| estimate_tokens(&text));

        CompressionOutcome {
            text,
            input_tokens,
            output_tokens,
        }
    }
}

impl From<CompressionOutcome> for CompressionResponse {
    fn from(outcome: CompressionOutcome) -> Self {
        Self {
            compressed_prompt: Some(outcome.text),
            origin_tokens: Some(outcome.input_tokens),
            compressed_tokens: Some(outcome.output_tokens),
        }
    }
}

/// A settled compression, ready to be shown
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionOutcome {
    pub text: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl CompressionOutcome {
    /// Share of input tokens removed, 0.0..=1.0
    pub fn reduction(&self) -> f64 {
        if self.input_tokens == 0 {
            return 0.0;
        }
        let kept = f64::from(self.output_tokens.min(self.input_tokens));
        1.0 - kept / f64::from(self.input_tokens)
    }
}

/// Strategy trait for compression backends
///
/// Implement this trait to plug a new backend into the demo.
#[async_trait]
pub trait Compressor: Send + Sync {
    /// Compress `text` at the given aggressiveness
    async fn compress(
        &self,
        text: &str,
        aggressiveness: Aggressiveness,
    ) -> Result<CompressionOutcome>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool {
        true
    }

    /// Backend name for logs and health reports
    fn name(&self) -> &str;
}

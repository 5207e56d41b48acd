//! # distill-runtime
//!
//! Runtime backends for the Distill demo.
//!
//! ## Backends
//!
//! - **Remote** (default): the compression service behind `POST /compress_prompt`
//! - **Heuristic**: re-exported from `distill-core` for offline use
//!
//! ## Usage
//!
//! ```rust,ignore
//! use distill_runtime::{backend, DemoConfig, DemoController};
//!
//! let config = DemoConfig::from_env();
//! let controller = DemoController::new(backend(&config)?, &config);
//! ```

pub mod remote;

use std::sync::Arc;

pub use remote::RemoteCompressor;

// Re-export core types for convenience
pub use distill_core::{
    Aggressiveness, CompressError, CompressionOutcome, Compressor, DemoConfig, DemoController,
    DemoMode, DemoState, HeuristicCompressor, Result,
};

/// Build the compressor selected by `config.mode`
pub fn backend(config: &DemoConfig) -> Result<Arc<dyn Compressor>> {
    Ok(match config.mode {
        DemoMode::Remote => Arc::new(RemoteCompressor::from_config(config)?),
        DemoMode::Local => Arc::new(HeuristicCompressor::new()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection() {
        let remote = backend(&DemoConfig::default()).unwrap();
        assert_eq!(remote.name(), "RemoteCompressor");

        let local = backend(&DemoConfig {
            mode: DemoMode::Local,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(local.name(), "HeuristicCompressor");
    }
}

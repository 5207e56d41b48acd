//! Application State

use std::sync::Arc;

use distill_core::Compressor;
use distill_report::CostModel;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Backend answering `/compress_prompt` (heuristic or an upstream service)
    pub compressor: Arc<dyn Compressor>,

    /// Cost model behind the savings estimator
    pub cost_model: Arc<CostModel>,
}

impl AppState {
    pub fn new(compressor: Arc<dyn Compressor>) -> Self {
        Self {
            compressor,
            cost_model: Arc::new(CostModel::default()),
        }
    }

    /// Heuristic-backed state, no network involved
    #[cfg(test)]
    pub fn local() -> Self {
        Self::new(Arc::new(distill_core::HeuristicCompressor::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_state_uses_heuristic() {
        let state = AppState::local();
        assert_eq!(state.compressor.name(), "HeuristicCompressor");
        assert_eq!(*state.cost_model, CostModel::default());
    }
}

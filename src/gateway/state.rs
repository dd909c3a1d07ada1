use std::sync::Arc;

use crate::analysis::AnalysisOrchestrator;
use crate::cache::ResultStore;
use crate::model::ModelAdapter;

/// Shared handler state.
pub struct HandlerState<M: ModelAdapter + 'static, C: ResultStore + 'static> {
    pub orchestrator: Arc<AnalysisOrchestrator<M, C>>,
}

impl<M: ModelAdapter, C: ResultStore> HandlerState<M, C> {
    /// Wraps an orchestrator for sharing across handlers.
    pub fn new(orchestrator: AnalysisOrchestrator<M, C>) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}

impl<M: ModelAdapter, C: ResultStore> Clone for HandlerState<M, C> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
        }
    }
}

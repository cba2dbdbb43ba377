//! ListIntents query handler.
//!
//! Read-only snapshot of the live knowledge base for admin views.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::engine::{EngineMetrics, IntentEngine};
use crate::domain::intent::Intent;

/// Snapshot of the live knowledge base.
#[derive(Debug, Clone)]
pub struct ListIntentsResult {
    /// Live intents, most recently added first.
    pub intents: Vec<Intent>,
    /// Engine counters at snapshot time.
    pub metrics: EngineMetrics,
}

/// Handler for knowledge base snapshots.
pub struct ListIntentsHandler {
    engine: Arc<Mutex<IntentEngine>>,
}

impl ListIntentsHandler {
    pub fn new(engine: Arc<Mutex<IntentEngine>>) -> Self {
        Self { engine }
    }

    /// Returns an owned snapshot. Infallible; holds the engine lock only
    /// long enough to clone.
    pub async fn handle(&self) -> ListIntentsResult {
        let engine = self.engine.lock().await;
        ListIntentsResult {
            intents: engine.list_intents().into_iter().cloned().collect(),
            metrics: engine.metrics(),
        }
    }
}

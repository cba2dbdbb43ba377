//! AddIntent command handler.
//!
//! Adds an operator-authored intent to the live engine and saves it for
//! the next restart. The engine addition is authoritative; persistence is
//! best effort and its failure is reported, not fatal.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::engine::{EngineError, IntentEngine};
use crate::domain::intent::Intent;
use crate::ports::IntentStore;

/// Command to add one intent to the knowledge base.
#[derive(Debug, Clone)]
pub struct AddIntentCommand {
    pub intent: Intent,
}

/// Result of adding an intent.
#[derive(Debug, Clone)]
pub struct AddIntentResult {
    /// Name of the intent that was added.
    pub name: String,
    /// Whether the intent was also saved durably.
    pub persisted: bool,
    /// Knowledge base size after the addition.
    pub total_intents: usize,
}

/// Errors that can occur when adding an intent.
#[derive(Debug, Error)]
pub enum AddIntentError {
    /// The intent failed validation or duplicates an existing name.
    #[error("{0}")]
    Rejected(#[from] EngineError),
}

/// Handler for live intent additions.
pub struct AddIntentHandler {
    engine: Arc<Mutex<IntentEngine>>,
    store: Arc<dyn IntentStore>,
}

impl AddIntentHandler {
    pub fn new(engine: Arc<Mutex<IntentEngine>>, store: Arc<dyn IntentStore>) -> Self {
        Self { engine, store }
    }

    pub async fn handle(&self, cmd: AddIntentCommand) -> Result<AddIntentResult, AddIntentError> {
        let intent = cmd.intent;
        let name = intent.name.clone();

        // Engine first: a store failure must not lose the live addition.
        let total_intents = {
            let mut engine = self.engine.lock().await;
            engine.add_intent(intent.clone())?;
            engine.metrics().total_intents
        };

        let persisted = match self.store.save(&intent).await {
            Ok(()) => true,
            Err(e) => {
                warn!(intent = %name, error = %e, "intent added live but could not be saved");
                false
            }
        };

        Ok(AddIntentResult {
            name,
            persisted,
            total_intents,
        })
    }
}

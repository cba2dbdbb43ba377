//! ClassifyMessage command handler.
//!
//! The main chat path: takes one user message plus its session context,
//! runs it through the engine and layers the raw-text escalation keyword
//! check on top of the engine's own decision.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::engine::{ClassificationResult, IntentEngine};
use crate::domain::foundation::{ChatContext, SessionId};

/// Command to classify one chat message.
#[derive(Debug, Clone)]
pub struct ClassifyMessageCommand {
    /// The conversation this message belongs to.
    pub session_id: SessionId,
    /// The raw message text as the user typed it.
    pub message: String,
    /// Payment status and personalization fields for this session.
    pub context: ChatContext,
}

impl ClassifyMessageCommand {
    /// Creates a new classify command.
    pub fn new(session_id: SessionId, message: impl Into<String>, context: ChatContext) -> Self {
        Self {
            session_id,
            message: message.into(),
            context,
        }
    }
}

/// Errors that can occur when classifying a message.
#[derive(Debug, Clone, Error)]
pub enum ClassifyMessageError {
    /// Message content is empty or whitespace only.
    #[error("Validation error: message content cannot be empty")]
    EmptyMessage,
}

/// Handler for the chat classification path.
pub struct ClassifyMessageHandler {
    engine: Arc<Mutex<IntentEngine>>,
}

impl ClassifyMessageHandler {
    pub fn new(engine: Arc<Mutex<IntentEngine>>) -> Self {
        Self { engine }
    }

    pub async fn handle(
        &self,
        cmd: ClassifyMessageCommand,
    ) -> Result<ClassificationResult, ClassifyMessageError> {
        if cmd.message.trim().is_empty() {
            return Err(ClassifyMessageError::EmptyMessage);
        }

        let mut engine = self.engine.lock().await;
        let mut result = engine.classify(&cmd.message, &cmd.context);

        // Distress keywords escalate regardless of which intent matched.
        if engine.needs_escalation(&cmd.message) {
            result.should_escalate = true;
        }

        debug!(
            session_id = %cmd.session_id,
            intent = %result.intent,
            confidence = result.confidence,
            should_escalate = result.should_escalate,
            "message classified"
        );
        Ok(result)
    }
}

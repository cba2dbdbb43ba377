//! Intent Store Port - Durable persistence for operator-added intents.
//!
//! The engine itself is persistence-blind: seed intents are compiled in and
//! operator-added intents reach it as plain values. This port is how the
//! application layer loads those saved intents at bootstrap and writes new
//! ones back out.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::intent::Intent;

/// Port for loading and saving operator-added intents.
///
/// # Contract
///
/// Implementations must:
/// - Return an empty list (not an error) when nothing has been saved yet
/// - Replace, not duplicate, an existing record with the same name on save
/// - Surface corrupt stored data as `DeserializationFailed` so callers can
///   degrade to the seed knowledge base
#[async_trait]
pub trait IntentStore: Send + Sync {
    /// Loads every saved intent, in the order they were saved.
    async fn load_all(&self) -> Result<Vec<Intent>, IntentStoreError>;

    /// Saves one intent durably.
    async fn save(&self, intent: &Intent) -> Result<(), IntentStoreError>;
}

/// Errors that can occur while loading or saving intents.
#[derive(Debug, Error)]
pub enum IntentStoreError {
    /// Underlying filesystem failure.
    #[error("intent store IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The intents could not be rendered to the storage format.
    #[error("failed to serialize intents: {reason}")]
    SerializationFailed { reason: String },

    /// The stored data is not a valid list of intent records.
    #[error("failed to deserialize intents: {reason}")]
    DeserializationFailed { reason: String },
}

impl IntentStoreError {
    /// Creates a serialization error.
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::SerializationFailed {
            reason: reason.into(),
        }
    }

    /// Creates a deserialization error.
    pub fn deserialization(reason: impl Into<String>) -> Self {
        Self::DeserializationFailed {
            reason: reason.into(),
        }
    }
}

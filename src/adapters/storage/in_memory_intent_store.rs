//! In-Memory Intent Store Adapter
//!
//! Holds operator-added intents in memory. Useful for tests and for
//! running the service without a writable data directory.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::intent::Intent;
use crate::ports::{IntentStore, IntentStoreError};

/// In-memory storage for operator-added intents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIntentStore {
    intents: Arc<RwLock<Vec<Intent>>>,
}

impl InMemoryIntentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given intents.
    pub fn with_intents(intents: Vec<Intent>) -> Self {
        Self {
            intents: Arc::new(RwLock::new(intents)),
        }
    }

    /// Number of stored intents.
    pub async fn count(&self) -> usize {
        self.intents.read().await.len()
    }
}

#[async_trait]
impl IntentStore for InMemoryIntentStore {
    async fn load_all(&self) -> Result<Vec<Intent>, IntentStoreError> {
        Ok(self.intents.read().await.clone())
    }

    async fn save(&self, intent: &Intent) -> Result<(), IntentStoreError> {
        let mut intents = self.intents.write().await;
        match intents.iter().position(|i| i.name == intent.name) {
            Some(index) => intents[index] = intent.clone(),
            None => intents.push(intent.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> Intent {
        Intent::new(name, vec!["pattern"], vec!["reply"])
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryIntentStore::new();
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_appends_and_replaces_by_name() {
        let store = InMemoryIntentStore::new();
        store.save(&sample("a")).await.unwrap();
        store.save(&sample("b")).await.unwrap();

        let replacement = Intent::new("a", vec!["changed"], vec!["reply"]);
        store.save(&replacement).await.unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].patterns, vec!["changed"]);
        assert_eq!(loaded[1].name, "b");
    }

    #[tokio::test]
    async fn clones_share_the_same_backing_list() {
        let store = InMemoryIntentStore::new();
        let view = store.clone();

        store.save(&sample("a")).await.unwrap();
        assert_eq!(view.count().await, 1);
    }

    #[tokio::test]
    async fn pre_populated_intents_load_back() {
        let store = InMemoryIntentStore::with_intents(vec![sample("seeded")]);
        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded[0].name, "seeded");
    }
}

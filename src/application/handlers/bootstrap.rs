//! Engine bootstrap - build and train the intent engine at startup.
//!
//! Loads operator-added intents from the store, merges them behind the
//! compiled-in seed knowledge base and returns a trained engine. Store
//! failures degrade to seed-only operation; only a broken seed set is
//! fatal.

use rand::rngs::StdRng;
use thiserror::Error;
use tracing::warn;

use crate::domain::engine::{EngineError, IntentEngine};
use crate::domain::intent::seed_intents;
use crate::ports::IntentStore;

/// Errors that can occur while bootstrapping the engine.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The knowledge base could not be loaded into the engine.
    #[error("failed to initialize intent engine: {0}")]
    Engine(#[from] EngineError),
}

/// Builds a trained engine from the seed knowledge base plus whatever the
/// store holds.
///
/// A store that cannot be read is logged and skipped; the service still
/// comes up with the seed intents alone.
pub async fn bootstrap_engine(store: &dyn IntentStore) -> Result<IntentEngine, BootstrapError> {
    bootstrap(store, IntentEngine::new()).await
}

/// Same as [`bootstrap_engine`] but with an injected RNG for reproducible
/// response selection.
pub async fn bootstrap_engine_with_rng(
    store: &dyn IntentStore,
    rng: StdRng,
) -> Result<IntentEngine, BootstrapError> {
    bootstrap(store, IntentEngine::with_rng(rng)).await
}

async fn bootstrap(
    store: &dyn IntentStore,
    mut engine: IntentEngine,
) -> Result<IntentEngine, BootstrapError> {
    let persisted = match store.load_all().await {
        Ok(persisted) => persisted,
        Err(e) => {
            warn!(error = %e, "could not load saved intents, continuing with seed knowledge base");
            Vec::new()
        }
    };

    engine.initialize(seed_intents(), persisted)?;
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryIntentStore;
    use crate::domain::foundation::ChatContext;
    use crate::domain::intent::Intent;
    use crate::ports::IntentStoreError;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl IntentStore for FailingStore {
        async fn load_all(&self) -> Result<Vec<Intent>, IntentStoreError> {
            Err(IntentStoreError::deserialization("simulated corruption"))
        }

        async fn save(&self, _intent: &Intent) -> Result<(), IntentStoreError> {
            Err(IntentStoreError::deserialization("simulated corruption"))
        }
    }

    #[tokio::test]
    async fn empty_store_boots_with_the_seed_knowledge_base() {
        let store = InMemoryIntentStore::new();
        let engine = bootstrap_engine(&store).await.unwrap();

        assert!(engine.is_initialized());
        assert_eq!(engine.metrics().total_intents, seed_intents().len());
    }

    #[tokio::test]
    async fn saved_intents_append_behind_the_seed() {
        let store = InMemoryIntentStore::with_intents(vec![Intent::new(
            "business_hours",
            vec!["what are your hours"],
            vec!["weekdays 8am-8pm EAT."],
        )]);
        let mut engine = bootstrap_engine(&store).await.unwrap();

        assert_eq!(engine.metrics().total_intents, seed_intents().len() + 1);
        let result = engine.classify("what are your hours", &ChatContext::new());
        assert_eq!(result.intent, "business_hours");
    }

    #[tokio::test]
    async fn saved_intent_colliding_with_a_seed_name_is_dropped() {
        let store = InMemoryIntentStore::with_intents(vec![Intent::new(
            "greeting",
            vec!["hello"],
            vec!["shadowed reply"],
        )]);
        let mut engine = bootstrap_engine(&store).await.unwrap();

        assert_eq!(engine.metrics().total_intents, seed_intents().len());
        let result = engine.classify("hello", &ChatContext::new());
        assert_eq!(result.intent, "greeting");
        assert_ne!(result.reply, "shadowed reply");
    }

    #[tokio::test]
    async fn unreadable_store_degrades_to_seed_only() {
        let engine = bootstrap_engine(&FailingStore).await.unwrap();
        assert!(engine.is_initialized());
        assert_eq!(engine.metrics().total_intents, seed_intents().len());
    }

    #[tokio::test]
    async fn seeded_rng_makes_bootstrap_reproducible() {
        use rand::SeedableRng;

        let store = InMemoryIntentStore::new();
        let mut first = bootstrap_engine_with_rng(&store, StdRng::seed_from_u64(3))
            .await
            .unwrap();
        let mut second = bootstrap_engine_with_rng(&store, StdRng::seed_from_u64(3))
            .await
            .unwrap();

        for _ in 0..5 {
            let a = first.classify("hello", &ChatContext::new());
            let b = second.classify("hello", &ChatContext::new());
            assert_eq!(a.reply, b.reply);
        }
    }
}

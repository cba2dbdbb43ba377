//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IntentStore` - Durable persistence for operator-added intents

mod intent_store;

pub use intent_store::{IntentStore, IntentStoreError};

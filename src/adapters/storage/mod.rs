//! Storage Adapters
//!
//! Implementations of the IntentStore port for persisting operator-added
//! intents.
//!
//! ## Available Adapters
//!
//! - **FileIntentStore** - Stores intents as a JSON array on disk
//! - **InMemoryIntentStore** - Stores intents in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileIntentStore, InMemoryIntentStore};
//!
//! // Production: file-based storage
//! let store = FileIntentStore::new("./data/custom_intents.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryIntentStore::new();
//! ```

mod file_intent_store;
mod in_memory_intent_store;

pub use file_intent_store::FileIntentStore;
pub use in_memory_intent_store::InMemoryIntentStore;

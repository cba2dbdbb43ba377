//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Intent store implementations (JSON file, in-memory)

pub mod storage;

pub use storage::{FileIntentStore, InMemoryIntentStore};

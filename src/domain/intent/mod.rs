//! Intent module - the knowledge base the engine matches against.

mod catalog;
mod record;
mod seed;

pub use catalog::IntentCatalog;
pub use record::Intent;
pub use seed::seed_intents;

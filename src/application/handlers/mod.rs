//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod add_intent;
pub mod bootstrap;
pub mod classify_message;
pub mod list_intents;

pub use add_intent::{AddIntentCommand, AddIntentError, AddIntentHandler, AddIntentResult};
pub use bootstrap::{bootstrap_engine, bootstrap_engine_with_rng, BootstrapError};
pub use classify_message::{
    ClassifyMessageCommand, ClassifyMessageError, ClassifyMessageHandler,
};
pub use list_intents::{ListIntentsHandler, ListIntentsResult};

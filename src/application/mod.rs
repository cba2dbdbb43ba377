//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Chat path
    ClassifyMessageCommand, ClassifyMessageError, ClassifyMessageHandler,
    // Knowledge base administration
    AddIntentCommand, AddIntentError, AddIntentHandler, AddIntentResult,
    ListIntentsHandler, ListIntentsResult,
    // Startup
    bootstrap_engine, bootstrap_engine_with_rng, BootstrapError,
};

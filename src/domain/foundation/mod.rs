//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Recovery Desk domain.

mod chat_context;
mod errors;
mod ids;
mod payment_status;

pub use chat_context::ChatContext;
pub use errors::ValidationError;
pub use ids::SessionId;
pub use payment_status::PaymentStatus;

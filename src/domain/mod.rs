//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `intent` - Intent records, the live catalog and the seed knowledge base
//! - `engine` - Pattern matching, Bayes classification and reply decisions

pub mod engine;
pub mod foundation;
pub mod intent;

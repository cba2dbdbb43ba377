//! Recovery Desk - Conversational Support for Account Recovery
//!
//! This crate implements the chatbot brain of a guided account-recovery
//! service: layered intent matching with a naive Bayes fallback, payment
//! gating and escalation handling.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

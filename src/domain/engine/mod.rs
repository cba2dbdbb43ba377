//! Message classification engine.
//!
//! Three cooperating pieces: the pattern matcher (exact, containment and
//! word-overlap stages), the naive Bayes classifier that backstops them,
//! and the [`IntentEngine`] facade that applies the reply decision ladder
//! on top. Within each matcher stage the first qualifying pattern wins;
//! catalog order is part of the engine's contract, not an accident.

mod classifier;
mod engine;
mod matcher;
mod replies;

pub use classifier::{BayesClassifier, Classification};
pub use engine::{
    ClassificationResult, EngineError, EngineMetrics, IntentEngine, ESCALATION_CONFIDENCE,
    MIN_CONFIDENCE,
};
pub use matcher::{
    match_patterns, normalize, PatternMatch, CONTAINMENT_CONFIDENCE, EXACT_MATCH_CONFIDENCE,
    OVERLAP_MINIMUM,
};
pub use replies::{
    contains_escalation_keyword, fallback_suggestions, render_template, suggestions_for_intent,
    CLARIFYING_REPLY, ESCALATION_KEYWORDS, ESCALATION_REPLY, PAYMENT_REQUIRED_REPLY,
    UNKNOWN_INTENT,
};

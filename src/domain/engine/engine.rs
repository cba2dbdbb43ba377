//! Intent engine facade.
//!
//! Owns the live intent catalog, the trained Bayes classifier and the
//! decision ladder that turns a match into a reply, an escalation or a
//! payment gate. One engine instance is built at process start and shared
//! behind a lock; `classify` and `add_intent` take `&mut self` so the
//! single-writer discipline is enforced by the borrow checker.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::foundation::{ChatContext, ValidationError};
use crate::domain::intent::{Intent, IntentCatalog};

use super::classifier::BayesClassifier;
use super::matcher::{match_patterns, normalize, PatternMatch};
use super::replies;

/// Matches below this confidence degrade to the clarifying reply.
pub const MIN_CONFIDENCE: f64 = 0.5;

/// Unknown results below this confidence also flag for escalation.
pub const ESCALATION_CONFIDENCE: f64 = 0.3;

/// Structured engine output for one classified message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub reply: String,
    pub intent: String,
    pub confidence: f64,
    pub should_escalate: bool,
    pub requires_payment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Informational counters for admin dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineMetrics {
    pub total_intents: usize,
    pub total_patterns: usize,
    #[serde(rename = "isInitialized")]
    pub initialized: bool,
}

/// Errors from engine initialization and live training.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("knowledge base is empty, at least one seed intent is required")]
    EmptyKnowledgeBase,

    #[error("invalid intent: {0}")]
    InvalidIntent(#[from] ValidationError),

    #[error("intent '{name}' is already registered")]
    DuplicateIntent { name: String },
}

/// The conversational brain: pattern cascade plus Bayes fallback plus
/// the reply decision ladder.
#[derive(Debug)]
pub struct IntentEngine {
    catalog: IntentCatalog,
    classifier: BayesClassifier,
    rng: StdRng,
    initialized: bool,
}

impl Default for IntentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentEngine {
    /// Creates an empty engine with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an empty engine with an injected RNG.
    ///
    /// Response templates are chosen uniformly at random; a seeded RNG
    /// makes that choice reproducible in tests.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            catalog: IntentCatalog::new(),
            classifier: BayesClassifier::new(),
            rng,
            initialized: false,
        }
    }

    /// Loads the knowledge base and trains the classifier.
    ///
    /// Seed intents load first, in authored order; persisted intents are
    /// appended unless their name collides with an existing one. An empty
    /// or malformed seed set is the only fatal condition. On error the
    /// engine is left untouched.
    pub fn initialize(
        &mut self,
        seed: Vec<Intent>,
        persisted: Vec<Intent>,
    ) -> Result<(), EngineError> {
        if seed.is_empty() {
            return Err(EngineError::EmptyKnowledgeBase);
        }

        let mut catalog = IntentCatalog::new();
        for intent in seed {
            intent.validate()?;
            if catalog.contains_name(&intent.name) {
                return Err(EngineError::DuplicateIntent { name: intent.name });
            }
            catalog.push(intent);
        }
        let appended = catalog.merge_persisted(persisted);

        self.catalog = catalog;
        self.retrain();
        self.initialized = true;

        info!(
            intents = self.catalog.len(),
            patterns = self.catalog.total_patterns(),
            persisted_appended = appended,
            "intent engine initialized"
        );
        Ok(())
    }

    /// Classifies a message and decides the reply.
    ///
    /// Never fails: the worst outcome is the clarifying "unknown" result.
    /// An engine that was never initialized trains lazily on whatever the
    /// catalog holds instead of erroring.
    pub fn classify(&mut self, message: &str, context: &ChatContext) -> ClassificationResult {
        if !self.initialized {
            self.retrain();
            self.initialized = true;
        }

        let normalized = normalize(message);
        // An empty needle is a substring of everything; bail out before
        // the containment stage can latch onto the first pattern.
        if normalized.is_empty() || self.catalog.is_empty() {
            return self.unknown_result(0.0);
        }

        let mut best = match_patterns(&self.catalog, &normalized);

        // Statistical fallback when the pattern stages came up short.
        if best.as_ref().map_or(true, |b| b.confidence < MIN_CONFIDENCE) {
            if let Some(top) = self.classifier.classify(&normalized) {
                let replaces = best.as_ref().map_or(true, |b| top.score > b.confidence);
                if replaces {
                    best = Some(PatternMatch {
                        intent: top.label,
                        confidence: top.score,
                    });
                }
            }
        }

        let Some(candidate) = best else {
            debug!(message_len = message.len(), "no intent matched");
            return self.unknown_result(0.0);
        };

        debug!(
            intent = %candidate.intent,
            confidence = candidate.confidence,
            "intent classified"
        );

        if candidate.confidence < MIN_CONFIDENCE {
            return self.unknown_result(candidate.confidence);
        }

        let Some(intent) = self.catalog.get(&candidate.intent) else {
            // A label the catalog no longer knows degrades like a no-match.
            return self.unknown_result(candidate.confidence);
        };

        if intent.escalate {
            return ClassificationResult {
                reply: replies::ESCALATION_REPLY.to_string(),
                intent: intent.name.clone(),
                confidence: candidate.confidence,
                should_escalate: true,
                requires_payment: false,
                suggestions: None,
            };
        }

        if intent.requires_payment && !context.has_paid() {
            return ClassificationResult {
                reply: replies::PAYMENT_REQUIRED_REPLY.to_string(),
                intent: intent.name.clone(),
                confidence: candidate.confidence,
                should_escalate: false,
                requires_payment: true,
                suggestions: None,
            };
        }

        let template = &intent.responses[self.rng.gen_range(0..intent.responses.len())];
        ClassificationResult {
            reply: replies::render_template(template, context),
            intent: intent.name.clone(),
            confidence: candidate.confidence,
            should_escalate: false,
            requires_payment: intent.requires_payment,
            suggestions: Some(replies::suggestions_for_intent(&intent.name)),
        }
    }

    /// Appends a new intent and retrains the classifier in full.
    ///
    /// Validation failures and duplicate names reject the call before any
    /// state changes. Durable persistence is the caller's separate,
    /// best-effort concern; its failure must not undo this addition.
    pub fn add_intent(&mut self, intent: Intent) -> Result<(), EngineError> {
        intent.validate()?;
        if self.catalog.contains_name(&intent.name) {
            return Err(EngineError::DuplicateIntent { name: intent.name });
        }

        let name = intent.name.clone();
        let patterns = intent.pattern_count();
        self.catalog.push(intent);
        self.retrain();

        info!(intent = %name, patterns, "new intent added");
        Ok(())
    }

    /// Live intents, most recently added first.
    pub fn list_intents(&self) -> Vec<&Intent> {
        self.catalog.list_recent_first()
    }

    /// Informational counters. No side effects.
    pub fn metrics(&self) -> EngineMetrics {
        EngineMetrics {
            total_intents: self.catalog.len(),
            total_patterns: self.catalog.total_patterns(),
            initialized: self.initialized,
        }
    }

    /// Keyword check for distress signals in a raw message.
    ///
    /// Independent of classification; callers OR this with the result's
    /// `should_escalate` when deciding to flag a conversation.
    pub fn needs_escalation(&self, raw_message: &str) -> bool {
        replies::contains_escalation_keyword(raw_message)
    }

    /// Returns true once the engine has trained on a knowledge base.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Rebuilds the classifier from every pattern in the catalog.
    fn retrain(&mut self) {
        let mut classifier = BayesClassifier::new();
        for intent in self.catalog.iter() {
            for pattern in &intent.patterns {
                classifier.add_document(pattern.to_lowercase(), intent.name.clone());
            }
        }
        classifier.train();
        self.classifier = classifier;
    }

    fn unknown_result(&self, confidence: f64) -> ClassificationResult {
        ClassificationResult {
            reply: replies::CLARIFYING_REPLY.to_string(),
            intent: replies::UNKNOWN_INTENT.to_string(),
            confidence,
            should_escalate: confidence < ESCALATION_CONFIDENCE,
            requires_payment: false,
            suggestions: Some(replies::fallback_suggestions()),
        }
    }
}

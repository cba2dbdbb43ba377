//! Staged pattern-matching cascade.
//!
//! Four signals in fixed order: exact match (1.0, short-circuits the whole
//! scan), substring containment (0.8, first hit sticks), word-overlap
//! similarity (accepted only when strictly above the running best and above
//! 0.5), and the Bayes fallback applied by the engine afterwards.
//!
//! The cascade is deliberately NOT a best-overall-match search. Later
//! containment hits do not displace an earlier one, and overlap only ever
//! raises the running best. Reordering the scan or "fixing" it into a
//! global argmax changes which intent wins for real inputs, so the
//! first-wins behavior is load-bearing and covered by tests.

use std::collections::HashSet;

use crate::domain::intent::IntentCatalog;

/// Confidence recorded for an exact pattern hit.
pub const EXACT_MATCH_CONFIDENCE: f64 = 1.0;

/// Confidence recorded for a substring containment hit.
pub const CONTAINMENT_CONFIDENCE: f64 = 0.8;

/// Word-overlap similarity must exceed this to count at all.
pub const OVERLAP_MINIMUM: f64 = 0.5;

/// A pattern-stage candidate: which intent, at what confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    pub intent: String,
    pub confidence: f64,
}

/// Lowercases and trims a message for matching.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Word-overlap similarity between two normalized phrases.
///
/// Counts message words present in the pattern's word set (message-side
/// duplicates count), divided by the longer of the two word counts.
fn word_overlap_similarity(message: &str, pattern: &str) -> f64 {
    let message_words: Vec<&str> = message.split_whitespace().collect();
    let pattern_words: Vec<&str> = pattern.split_whitespace().collect();
    if message_words.is_empty() || pattern_words.is_empty() {
        return 0.0;
    }

    let pattern_set: HashSet<&str> = pattern_words.iter().copied().collect();
    let overlap = message_words
        .iter()
        .filter(|word| pattern_set.contains(*word))
        .count();

    overlap as f64 / message_words.len().max(pattern_words.len()) as f64
}

/// Runs the pattern stages over the catalog for a normalized message.
///
/// Expects `normalized` to already be lowercased and trimmed. Returns the
/// winning candidate, or `None` when no stage produced one.
pub fn match_patterns(catalog: &IntentCatalog, normalized: &str) -> Option<PatternMatch> {
    if normalized.is_empty() {
        return None;
    }

    // Stage 1: first exact hit wins outright and ends the scan.
    for intent in catalog.iter() {
        for pattern in &intent.patterns {
            if normalize(pattern) == normalized {
                return Some(PatternMatch {
                    intent: intent.name.clone(),
                    confidence: EXACT_MATCH_CONFIDENCE,
                });
            }
        }
    }

    let mut best: Option<PatternMatch> = None;

    // Stage 2: containment in either direction. Only adopted while the
    // running best is strictly below 0.8, so the first hit sticks.
    for intent in catalog.iter() {
        for pattern in &intent.patterns {
            let pattern = normalize(pattern);
            let contained = normalized.contains(&pattern) || pattern.contains(normalized);
            if contained && best.as_ref().map_or(true, |b| b.confidence < CONTAINMENT_CONFIDENCE) {
                best = Some(PatternMatch {
                    intent: intent.name.clone(),
                    confidence: CONTAINMENT_CONFIDENCE,
                });
            }
        }
    }

    // Stage 3: word overlap can only raise the running best, and never
    // below the 0.5 floor.
    for intent in catalog.iter() {
        for pattern in &intent.patterns {
            let similarity = word_overlap_similarity(normalized, &normalize(pattern));
            let improves = best.as_ref().map_or(true, |b| similarity > b.confidence);
            if improves && similarity > OVERLAP_MINIMUM {
                best = Some(PatternMatch {
                    intent: intent.name.clone(),
                    confidence: similarity,
                });
            }
        }
    }

    best
}

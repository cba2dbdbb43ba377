//! Multinomial naive Bayes classifier over intent pattern documents.
//!
//! Statistical fallback for messages the pattern cascade cannot place.
//! Scores are posteriors normalized across labels, so the top score is a
//! probability in [0, 1] and comparable with the engine's confidence
//! thresholds.

use std::collections::{HashMap, HashSet};

/// Top classification for a message.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
struct TrainedModel {
    /// Labels in first-seen order, the deterministic tie-break order.
    labels: Vec<String>,
    doc_counts: HashMap<String, usize>,
    token_counts: HashMap<String, HashMap<String, usize>>,
    label_token_totals: HashMap<String, usize>,
    vocabulary: HashSet<String>,
    total_docs: usize,
}

/// Bag-of-words Bayes classifier with Laplace smoothing.
///
/// Documents accumulate via `add_document`; `train` rebuilds the model
/// from the full document set, so repeated train calls after new
/// documents always produce a complete retrain.
#[derive(Debug, Clone, Default)]
pub struct BayesClassifier {
    documents: Vec<(String, String)>,
    model: Option<TrainedModel>,
}

/// Lowercases and splits on non-alphanumeric runs.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

impl BayesClassifier {
    /// Creates an empty, untrained classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a training document under a label.
    pub fn add_document(&mut self, text: impl Into<String>, label: impl Into<String>) {
        self.documents.push((text.into(), label.into()));
    }

    /// Number of accumulated training documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Returns true once `train` has produced a usable model.
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Trains on the full accumulated document set.
    pub fn train(&mut self) {
        if self.documents.is_empty() {
            self.model = None;
            return;
        }

        let mut model = TrainedModel::default();
        for (text, label) in &self.documents {
            if !model.doc_counts.contains_key(label) {
                model.labels.push(label.clone());
            }
            *model.doc_counts.entry(label.clone()).or_insert(0) += 1;
            model.total_docs += 1;

            for token in tokenize(text) {
                model.vocabulary.insert(token.clone());
                *model
                    .token_counts
                    .entry(label.clone())
                    .or_default()
                    .entry(token)
                    .or_insert(0) += 1;
                *model.label_token_totals.entry(label.clone()).or_insert(0) += 1;
            }
        }
        self.model = Some(model);
    }

    /// Classifies a message, returning the best label and its posterior.
    ///
    /// Tokens never seen during training carry no evidence and are
    /// skipped; a message with no known token falls back to class priors.
    /// Returns `None` when untrained or when the message has no tokens.
    pub fn classify(&self, message: &str) -> Option<Classification> {
        let model = self.model.as_ref()?;
        let tokens = tokenize(message);
        if tokens.is_empty() || model.total_docs == 0 {
            return None;
        }

        let empty = HashMap::new();
        let mut log_scores = Vec::with_capacity(model.labels.len());
        for label in &model.labels {
            let docs = *model.doc_counts.get(label).unwrap_or(&0);
            let mut log_score = (docs as f64 / model.total_docs as f64).ln();

            let counts = model.token_counts.get(label).unwrap_or(&empty);
            let token_total = *model.label_token_totals.get(label).unwrap_or(&0);
            let denominator = (token_total + model.vocabulary.len()) as f64;

            for token in &tokens {
                if !model.vocabulary.contains(token) {
                    continue;
                }
                // Laplace smoothing keeps tokens unseen for this label
                // from zeroing the whole product.
                let count = counts.get(token).copied().unwrap_or(0);
                log_score += ((count + 1) as f64 / denominator).ln();
            }
            log_scores.push(log_score);
        }

        // Normalize in log space so the winner is a true probability.
        let max_log = log_scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = log_scores.iter().map(|ls| (ls - max_log).exp()).collect();
        let total: f64 = weights.iter().sum();

        let mut best_idx = 0;
        for (idx, weight) in weights.iter().enumerate() {
            if *weight > weights[best_idx] {
                best_idx = idx;
            }
        }

        Some(Classification {
            label: model.labels[best_idx].clone(),
            score: weights[best_idx] / total,
        })
    }
}

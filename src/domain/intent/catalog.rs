//! IntentCatalog - the live, ordered collection of knowledge-base intents.

use tracing::warn;

use super::Intent;

/// Ordered intent collection with the seed-priority merge policy.
///
/// Seed intents are loaded first, in authored order. Persisted intents are
/// appended only when their name is not already taken: a persisted record
/// colliding with a seed name is dropped, not overwritten. That precedence
/// is deliberate product policy and must not be inverted.
#[derive(Debug, Clone, Default)]
pub struct IntentCatalog {
    intents: Vec<Intent>,
}

impl IntentCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an intent with this name is already registered.
    pub fn contains_name(&self, name: &str) -> bool {
        self.intents.iter().any(|i| i.name == name)
    }

    /// Looks up an intent by name.
    pub fn get(&self, name: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.name == name)
    }

    /// Appends an intent without checks. Callers validate and de-duplicate.
    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    /// Merges persisted intents behind the already-loaded seed set.
    ///
    /// Malformed records and name collisions are skipped with a warning;
    /// neither is fatal. Returns the number of records actually appended.
    pub fn merge_persisted(&mut self, persisted: Vec<Intent>) -> usize {
        let mut appended = 0;
        for intent in persisted {
            if let Err(reason) = intent.validate() {
                warn!(name = %intent.name, %reason, "skipping malformed persisted intent");
                continue;
            }
            if self.contains_name(&intent.name) {
                warn!(
                    name = %intent.name,
                    "persisted intent collides with an existing name, keeping the existing one"
                );
                continue;
            }
            self.intents.push(intent);
            appended += 1;
        }
        appended
    }

    /// Iterates intents in insertion order (seed first).
    pub fn iter(&self) -> impl Iterator<Item = &Intent> {
        self.intents.iter()
    }

    /// Returns intents in reverse-insertion order, newest first.
    ///
    /// Administrative views list the most recently added training first.
    pub fn list_recent_first(&self) -> Vec<&Intent> {
        self.intents.iter().rev().collect()
    }

    /// Number of registered intents.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Returns true if no intents are registered.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Sum of pattern counts across all intents.
    pub fn total_patterns(&self) -> usize {
        self.intents.iter().map(Intent::pattern_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(name: &str) -> Intent {
        Intent::new(name, vec![format!("{} pattern", name)], vec!["reply".to_string()])
    }

    mod merge_policy {
        use super::*;

        #[test]
        fn persisted_intents_with_new_names_are_appended() {
            let mut catalog = IntentCatalog::new();
            catalog.push(intent("greeting"));

            let appended = catalog.merge_persisted(vec![intent("pricing"), intent("refunds")]);

            assert_eq!(appended, 2);
            assert_eq!(catalog.len(), 3);
            assert!(catalog.contains_name("pricing"));
            assert!(catalog.contains_name("refunds"));
        }

        #[test]
        fn colliding_persisted_intent_is_dropped_not_overwritten() {
            let mut catalog = IntentCatalog::new();
            let seed = Intent::new("greeting", vec!["hello"], vec!["seed reply"]);
            catalog.push(seed.clone());

            let persisted = Intent::new("greeting", vec!["yo"], vec!["persisted reply"]);
            let appended = catalog.merge_persisted(vec![persisted]);

            assert_eq!(appended, 0);
            assert_eq!(catalog.len(), 1);
            assert_eq!(catalog.get("greeting"), Some(&seed));
        }

        #[test]
        fn malformed_persisted_intent_is_skipped() {
            let mut catalog = IntentCatalog::new();
            catalog.push(intent("greeting"));

            let mut broken = intent("broken");
            broken.patterns.clear();
            let appended = catalog.merge_persisted(vec![broken, intent("pricing")]);

            assert_eq!(appended, 1);
            assert!(!catalog.contains_name("broken"));
            assert!(catalog.contains_name("pricing"));
        }

        #[test]
        fn duplicate_names_within_the_persisted_batch_keep_the_first() {
            let mut catalog = IntentCatalog::new();

            let first = Intent::new("pricing", vec!["cost"], vec!["first"]);
            let second = Intent::new("pricing", vec!["price"], vec!["second"]);
            let appended = catalog.merge_persisted(vec![first.clone(), second]);

            assert_eq!(appended, 1);
            assert_eq!(catalog.get("pricing"), Some(&first));
        }
    }

    mod listing {
        use super::*;

        #[test]
        fn list_recent_first_reverses_insertion_order() {
            let mut catalog = IntentCatalog::new();
            catalog.push(intent("first"));
            catalog.push(intent("second"));
            catalog.push(intent("third"));

            let names: Vec<&str> = catalog
                .list_recent_first()
                .iter()
                .map(|i| i.name.as_str())
                .collect();
            assert_eq!(names, vec!["third", "second", "first"]);
        }

        #[test]
        fn iter_preserves_insertion_order() {
            let mut catalog = IntentCatalog::new();
            catalog.push(intent("first"));
            catalog.push(intent("second"));

            let names: Vec<&str> = catalog.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(names, vec!["first", "second"]);
        }
    }

    mod counters {
        use super::*;

        #[test]
        fn total_patterns_sums_across_intents() {
            let mut catalog = IntentCatalog::new();
            catalog.push(Intent::new("a", vec!["p1", "p2"], vec!["r"]));
            catalog.push(Intent::new("b", vec!["p3"], vec!["r"]));

            assert_eq!(catalog.total_patterns(), 3);
        }

        #[test]
        fn empty_catalog_reports_zero() {
            let catalog = IntentCatalog::new();
            assert!(catalog.is_empty());
            assert_eq!(catalog.len(), 0);
            assert_eq!(catalog.total_patterns(), 0);
        }
    }
}

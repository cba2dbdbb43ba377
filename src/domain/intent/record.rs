//! Intent value object - one named rule of the knowledge base.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A named category of user request with example phrasings and replies.
///
/// Patterns are stored as authored and lowercase-normalized at match time.
/// Response templates may contain `{platform}`, `{name}` and `{email}`
/// placeholders, filled from the conversation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
    #[serde(default)]
    pub requires_payment: bool,
    #[serde(default)]
    pub escalate: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Intent {
    /// Creates an intent with both flags off and no tags.
    pub fn new(
        name: impl Into<String>,
        patterns: Vec<impl Into<String>>,
        responses: Vec<impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
            requires_payment: false,
            escalate: false,
            tags: Vec::new(),
        }
    }

    /// Marks the intent as gated behind a completed payment.
    pub fn requires_payment(mut self) -> Self {
        self.requires_payment = true;
        self
    }

    /// Marks the intent as always escalating to a human agent.
    pub fn escalates(mut self) -> Self {
        self.escalate = true;
        self
    }

    /// Attaches admin categorization tags. No behavioral effect.
    pub fn with_tags(mut self, tags: Vec<impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Validates the structural requirements of a knowledge-base record.
    ///
    /// Name, patterns and responses are required; patterns and responses
    /// must be non-empty lists without blank entries.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.patterns.is_empty() {
            return Err(ValidationError::empty_list("patterns"));
        }
        if self.responses.is_empty() {
            return Err(ValidationError::empty_list("responses"));
        }
        if let Some(idx) = self.patterns.iter().position(|p| p.trim().is_empty()) {
            return Err(ValidationError::invalid_format(
                "patterns",
                format!("blank entry at index {}", idx),
            ));
        }
        if let Some(idx) = self.responses.iter().position(|r| r.trim().is_empty()) {
            return Err(ValidationError::invalid_format(
                "responses",
                format!("blank entry at index {}", idx),
            ));
        }
        Ok(())
    }

    /// Total number of example phrasings registered under this intent.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_intent() -> Intent {
        Intent::new(
            "greeting",
            vec!["hello", "hi"],
            vec!["Hi there! How can I help you today?"],
        )
    }

    mod construction {
        use super::*;

        #[test]
        fn new_defaults_flags_off_and_tags_empty() {
            let intent = sample_intent();
            assert!(!intent.requires_payment);
            assert!(!intent.escalate);
            assert!(intent.tags.is_empty());
        }

        #[test]
        fn builder_flags_are_applied() {
            let gated = sample_intent().requires_payment();
            assert!(gated.requires_payment);

            let escalating = sample_intent().escalates();
            assert!(escalating.escalate);
        }

        #[test]
        fn with_tags_stores_labels() {
            let intent = sample_intent().with_tags(vec!["core", "onboarding"]);
            assert_eq!(intent.tags, vec!["core", "onboarding"]);
        }

        #[test]
        fn pattern_count_reflects_pattern_list() {
            assert_eq!(sample_intent().pattern_count(), 2);
        }
    }

    mod validation {
        use super::*;
        use crate::domain::foundation::ValidationError;

        #[test]
        fn well_formed_intent_passes() {
            assert!(sample_intent().validate().is_ok());
        }

        #[test]
        fn blank_name_is_rejected() {
            let mut intent = sample_intent();
            intent.name = "   ".to_string();
            assert!(matches!(
                intent.validate(),
                Err(ValidationError::EmptyField { field }) if field == "name"
            ));
        }

        #[test]
        fn empty_pattern_list_is_rejected() {
            let mut intent = sample_intent();
            intent.patterns.clear();
            assert!(matches!(
                intent.validate(),
                Err(ValidationError::EmptyList { field }) if field == "patterns"
            ));
        }

        #[test]
        fn empty_response_list_is_rejected() {
            let mut intent = sample_intent();
            intent.responses.clear();
            assert!(matches!(
                intent.validate(),
                Err(ValidationError::EmptyList { field }) if field == "responses"
            ));
        }

        #[test]
        fn blank_pattern_entry_is_rejected() {
            let mut intent = sample_intent();
            intent.patterns.push("  ".to_string());
            assert!(matches!(
                intent.validate(),
                Err(ValidationError::InvalidFormat { field, .. }) if field == "patterns"
            ));
        }

        #[test]
        fn blank_response_entry_is_rejected() {
            let mut intent = sample_intent();
            intent.responses.insert(0, String::new());
            assert!(matches!(
                intent.validate(),
                Err(ValidationError::InvalidFormat { field, .. }) if field == "responses"
            ));
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn deserializes_with_missing_optional_fields() {
            let json = r#"{
                "name": "pricing",
                "patterns": ["how much does it cost"],
                "responses": ["Our plans start at KES 2,000."]
            }"#;

            let intent: Intent = serde_json::from_str(json).unwrap();
            assert_eq!(intent.name, "pricing");
            assert!(!intent.requires_payment);
            assert!(!intent.escalate);
            assert!(intent.tags.is_empty());
        }

        #[test]
        fn serializes_with_snake_case_keys() {
            let intent = sample_intent().requires_payment();
            let json = serde_json::to_value(&intent).unwrap();
            assert_eq!(json["requires_payment"], true);
            assert_eq!(json["escalate"], false);
            assert!(json["patterns"].is_array());
        }

        #[test]
        fn round_trips_through_json() {
            let intent = sample_intent().escalates().with_tags(vec!["support"]);
            let json = serde_json::to_string(&intent).unwrap();
            let back: Intent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, intent);
        }
    }
}

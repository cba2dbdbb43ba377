//! Canned reply texts, follow-up suggestions and escalation keywords.
//!
//! Copy is product-owned and returned verbatim; the engine only decides
//! which block applies.

use crate::domain::foundation::ChatContext;

/// Intent name reported when no intent clears the confidence floor.
pub const UNKNOWN_INTENT: &str = "unknown";

/// Reply for low-confidence and unmatched messages.
pub const CLARIFYING_REPLY: &str = "I'm not quite sure I understood that. Could you rephrase your question, or would you like to speak with a human support agent?";

/// Reply when a matched intent routes to a human agent.
pub const ESCALATION_REPLY: &str = "I understand you need additional help. Let me connect you with our support team. They'll respond shortly.";

/// Reply when premium content is gated behind an unpaid request.
pub const PAYMENT_REQUIRED_REPLY: &str = "To access detailed recovery steps and premium support, you'll need to complete payment first. After payment, you'll receive:\n\n✅ Platform-specific step-by-step recovery instructions\n✅ One-on-one chat support\n✅ Security checklist PDF\n✅ Help setting up 2FA\n✅ Priority response from our team\n\nWould you like to proceed with payment?";

/// Keywords that flag a message for human attention regardless of intent.
pub const ESCALATION_KEYWORDS: [&str; 13] = [
    "human",
    "agent",
    "person",
    "representative",
    "talk to someone",
    "not helping",
    "frustrated",
    "angry",
    "urgent",
    "emergency",
    "supervisor",
    "manager",
    "complaint",
];

/// Case-insensitive keyword scan over a raw (unnormalized) message.
pub fn contains_escalation_keyword(message: &str) -> bool {
    let lower = message.to_lowercase();
    ESCALATION_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Suggestions attached to the clarifying reply.
pub fn fallback_suggestions() -> Vec<String> {
    to_owned(&[
        "How can I recover my hacked account?",
        "What do I get after I pay?",
        "I need human support",
    ])
}

/// Follow-up suggestions for a matched intent.
///
/// Unlisted intent names get a generic three-item list.
pub fn suggestions_for_intent(intent_name: &str) -> Vec<String> {
    match intent_name {
        "greeting" => to_owned(&[
            "I need help recovering my account",
            "What services do you offer?",
            "How much does it cost?",
        ]),
        "lost_account" => to_owned(&[
            "Do I still have access to my email?",
            "What if my email was also hacked?",
            "How long will recovery take?",
        ]),
        "payment_question" => to_owned(&[
            "What payment methods do you accept?",
            "Can I get a refund?",
            "When should I pay?",
        ]),
        "security_question" => to_owned(&[
            "How do I enable 2FA?",
            "What's a strong password?",
            "How can I secure my account?",
        ]),
        _ => to_owned(&[
            "Tell me more about your service",
            "I'm ready to start recovery",
            "Speak to a human",
        ]),
    }
}

/// Fills response-template placeholders from the conversation context.
///
/// Absent context values fall back to neutral wording so a template never
/// leaks a raw placeholder.
pub fn render_template(template: &str, context: &ChatContext) -> String {
    template
        .replace("{platform}", context.platform.as_deref().unwrap_or("your account"))
        .replace("{name}", context.name.as_deref().unwrap_or("there"))
        .replace("{email}", context.email.as_deref().unwrap_or("your email"))
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod escalation_keywords {
        use super::*;

        #[test]
        fn detects_single_word_keywords() {
            assert!(contains_escalation_keyword("I want to talk to a human agent now"));
            assert!(contains_escalation_keyword("this is urgent"));
        }

        #[test]
        fn detects_multi_word_keywords() {
            assert!(contains_escalation_keyword("can I talk to someone about this"));
            assert!(contains_escalation_keyword("the bot is not helping at all"));
        }

        #[test]
        fn matching_is_case_insensitive() {
            assert!(contains_escalation_keyword("GET ME A SUPERVISOR"));
            assert!(contains_escalation_keyword("I am FRUSTRATED"));
        }

        #[test]
        fn ordinary_questions_do_not_trigger() {
            assert!(!contains_escalation_keyword("how much does it cost"));
            assert!(!contains_escalation_keyword("hello"));
            assert!(!contains_escalation_keyword(""));
        }
    }

    mod suggestions {
        use super::*;

        #[test]
        fn known_intents_have_three_specific_suggestions() {
            for name in ["greeting", "lost_account", "payment_question", "security_question"] {
                let suggestions = suggestions_for_intent(name);
                assert_eq!(suggestions.len(), 3, "intent {}", name);
            }
            assert_eq!(
                suggestions_for_intent("greeting")[0],
                "I need help recovering my account"
            );
        }

        #[test]
        fn unlisted_intents_get_the_generic_list() {
            let suggestions = suggestions_for_intent("pricing");
            assert_eq!(
                suggestions,
                vec![
                    "Tell me more about your service",
                    "I'm ready to start recovery",
                    "Speak to a human",
                ]
            );
        }

        #[test]
        fn fallback_list_has_exactly_three_items() {
            let suggestions = fallback_suggestions();
            assert_eq!(suggestions.len(), 3);
            assert_eq!(suggestions[2], "I need human support");
        }
    }

    mod templating {
        use super::*;
        use crate::domain::foundation::PaymentStatus;

        #[test]
        fn placeholders_are_filled_from_context() {
            let context = ChatContext::with_payment_status(PaymentStatus::Paid)
                .platform("Instagram")
                .name("Amina")
                .email("amina@example.com");

            let rendered = render_template(
                "Hi {name}, we are recovering {platform} and will write to {email}.",
                &context,
            );
            assert_eq!(
                rendered,
                "Hi Amina, we are recovering Instagram and will write to amina@example.com."
            );
        }

        #[test]
        fn missing_context_values_use_neutral_fallbacks() {
            let rendered = render_template(
                "Hi {name}, {platform} recovery starts with {email}.",
                &ChatContext::new(),
            );
            assert_eq!(
                rendered,
                "Hi there, your account recovery starts with your email."
            );
        }

        #[test]
        fn repeated_placeholders_are_all_replaced() {
            let context = ChatContext::new().platform("Gmail");
            let rendered = render_template("{platform} and {platform} again", &context);
            assert_eq!(rendered, "Gmail and Gmail again");
        }

        #[test]
        fn templates_without_placeholders_pass_through() {
            let text = "No placeholders here.";
            assert_eq!(render_template(text, &ChatContext::new()), text);
        }
    }

    mod canned_replies {
        use super::*;

        #[test]
        fn clarifying_reply_offers_a_human_agent() {
            assert!(CLARIFYING_REPLY.starts_with("I'm not quite sure"));
            assert!(CLARIFYING_REPLY.contains("human support agent"));
        }

        #[test]
        fn payment_reply_lists_the_premium_benefits() {
            assert!(PAYMENT_REQUIRED_REPLY.contains("complete payment first"));
            assert!(PAYMENT_REQUIRED_REPLY.contains("2FA"));
            assert!(PAYMENT_REQUIRED_REPLY.contains("Security checklist PDF"));
        }

        #[test]
        fn escalation_reply_promises_the_support_team() {
            assert!(ESCALATION_REPLY.contains("support team"));
        }
    }
}

//! Shipped seed knowledge base for the recovery support bot.
//!
//! Authored as data, loaded at bootstrap ahead of any persisted custom
//! intents. Pattern strings are lowercase; response templates may use the
//! `{platform}`, `{name}` and `{email}` placeholders.

use once_cell::sync::Lazy;

use super::Intent;

static SEED: Lazy<Vec<Intent>> = Lazy::new(|| {
    vec![
        Intent::new(
            "greeting",
            vec![
                "hello",
                "hi",
                "hey",
                "hi there",
                "good morning",
                "good afternoon",
                "greetings",
            ],
            vec![
                "Hi there! Welcome to Recovery Desk. I help people get back into hacked social media and email accounts. How can I help you today?",
                "Hello {name}! I'm the Recovery Desk assistant. Tell me what happened to your account and I'll point you in the right direction.",
            ],
        )
        .with_tags(vec!["core", "onboarding"]),
        Intent::new(
            "lost_account",
            vec![
                "my account is hacked",
                "my account was hacked",
                "i lost my account",
                "someone stole my account",
                "help me recover my account",
                "i cannot log in",
                "my account is compromised",
                "hacker changed my password",
            ],
            vec![
                "Here's your recovery plan for {platform}: start from the official account recovery page, verify your identity with a previous password or linked phone number, then follow the step-by-step instructions prepared for your case. Open your dashboard to see each step.",
                "Let's get {platform} back. Your case checklist covers identity verification, securing {email}, and locking the attacker out. Work through the steps in order and reply here if any step fails.",
            ],
        )
        .requires_payment()
        .with_tags(vec!["core", "recovery"]),
        Intent::new(
            "email_hacked",
            vec![
                "my email was also hacked",
                "my email is hacked",
                "i lost access to my email",
                "hacker controls my email",
                "email account compromised",
            ],
            vec![
                "When the linked email is compromised we recover it first, since {platform} recovery depends on it. Your plan starts with the email provider's own recovery flow and a phone number verification.",
                "We'll work on {email} before anything else. Getting the mailbox back is the fastest route into your other accounts.",
            ],
        )
        .requires_payment()
        .with_tags(vec!["recovery"]),
        Intent::new(
            "how_it_works",
            vec![
                "how does it work",
                "how does this work",
                "what happens after i submit",
                "explain the process",
                "what do you do",
                "how do you recover accounts",
            ],
            vec![
                "Three steps: you submit a recovery request describing what happened, complete payment, then follow personalized recovery instructions while our team supports you over chat until you're back in.",
                "You tell us which account was hacked, we prepare platform-specific recovery steps and walk you through them one on one. Most customers are back in within days.",
            ],
        )
        .with_tags(vec!["onboarding"]),
        Intent::new(
            "pricing",
            vec![
                "how much does it cost",
                "what is the price",
                "pricing",
                "how much do you charge",
                "what are your rates",
                "cost of recovery",
            ],
            vec![
                "Basic recovery is KES 2,000 per account and Premium is KES 3,000. Premium adds one-on-one chat support, a security checklist PDF and help setting up 2FA after recovery.",
                "We charge a flat fee per account: KES 2,000 for Basic or KES 3,000 for Premium with priority support. No hidden charges.",
            ],
        )
        .with_tags(vec!["billing"]),
        Intent::new(
            "payment_question",
            vec![
                "when should i pay",
                "do i pay first",
                "why do i need to pay",
                "payment",
                "i have a question about payment",
                "is payment required",
            ],
            vec![
                "Payment comes right after you submit your request. It unlocks your personalized recovery steps and a direct chat line with our team. You can pay with M-Pesa or card.",
                "We ask for payment up front so our team can start on your case immediately. If we can't respond within 48 hours you get a full refund.",
            ],
        )
        .with_tags(vec!["billing"]),
        Intent::new(
            "payment_methods",
            vec![
                "what payment methods do you accept",
                "can i pay with mpesa",
                "do you accept card",
                "how do i pay",
                "mpesa payment",
            ],
            vec![
                "We accept M-Pesa, Visa and Mastercard. Payments are processed securely through Flutterwave and your dashboard unlocks as soon as the payment confirms.",
                "M-Pesa and major cards both work. After checkout the confirmation usually lands within a minute.",
            ],
        )
        .with_tags(vec!["billing"]),
        Intent::new(
            "refund_policy",
            vec![
                "can i get a refund",
                "refund",
                "money back",
                "what if it does not work",
                "do you offer refunds",
            ],
            vec![
                "If our team doesn't respond to your case within 48 hours of payment, you get a full refund. If a recovery turns out to be impossible we refund per our fair-use policy.",
                "Refunds are automatic when we miss our 48-hour response window. Write to support from your dashboard and we'll sort it out.",
            ],
        )
        .with_tags(vec!["billing"]),
        Intent::new(
            "recovery_time",
            vec![
                "how long will recovery take",
                "how long does it take",
                "when will i get my account back",
                "recovery time",
                "how fast are you",
            ],
            vec![
                "Simple cases take 1-3 days. Complex ones, like a hacked account with a changed email and phone number, can take 5-14 days. You'll see progress updates in your dashboard.",
                "Most recoveries finish within 1-3 days. If the attacker changed your contact details it can take up to two weeks.",
            ],
        )
        .with_tags(vec!["recovery"]),
        Intent::new(
            "security_question",
            vec![
                "how do i secure my account",
                "how can i protect my account",
                "security tips",
                "how do i stay safe",
                "prevent hacking",
            ],
            vec![
                "Start with a unique password from a password manager, switch on two-factor authentication, and remove any unknown recovery emails or phone numbers from the account.",
                "Three habits stop most takeovers: use a unique password per site, turn on 2FA everywhere it matters, and never enter your password on a link that arrived by message.",
            ],
        )
        .with_tags(vec!["security"]),
        Intent::new(
            "two_factor",
            vec![
                "how do i enable 2fa",
                "what is 2fa",
                "two factor authentication",
                "set up 2fa",
                "enable two factor",
            ],
            vec![
                "Two-factor authentication adds a second check at login, usually a code from an app like Google Authenticator. Premium customers get guided 2FA setup for every recovered account.",
                "In your account's security settings, choose two-factor authentication and scan the QR code with an authenticator app. Save the backup codes somewhere offline.",
            ],
        )
        .with_tags(vec!["security"]),
        Intent::new(
            "status_check",
            vec![
                "what is the status of my request",
                "any update on my case",
                "track my request",
                "status update",
                "is my recovery done",
            ],
            vec![
                "You can track your request anytime from the tracking page using your request ID and email. Status moves from new to in progress to resolved.",
                "Check the tracking page with your request ID, it shows exactly where your case is. If it's been quiet for more than a day, message us there.",
            ],
        )
        .with_tags(vec!["support"]),
        Intent::new(
            "supported_platforms",
            vec![
                "which platforms do you support",
                "can you recover instagram",
                "do you do facebook",
                "what accounts can you recover",
                "supported platforms",
            ],
            vec![
                "We recover Facebook, Instagram, Gmail, TikTok, YouTube, Twitter/X, Snapchat, LinkedIn, Yahoo Mail, Outlook, WhatsApp Business and Telegram accounts.",
                "All the major ones: Facebook, Instagram, Gmail, TikTok, YouTube, X, Snapchat, LinkedIn and most email providers. If yours isn't listed, ask and we'll confirm.",
            ],
        )
        .with_tags(vec!["onboarding"]),
        Intent::new(
            "thanks",
            vec!["thank you", "thanks", "thanks a lot", "appreciate it", "that helped"],
            vec![
                "You're welcome! Anything else I can help you with?",
                "Happy to help, {name}! Let me know if anything else comes up.",
            ],
        ),
        Intent::new(
            "goodbye",
            vec!["bye", "goodbye", "see you", "talk later", "that is all"],
            vec![
                "Goodbye! Come back anytime if you need help with your account.",
                "Take care, and stay safe online!",
            ],
        ),
        Intent::new(
            "human_support",
            vec![
                "i need human support",
                "talk to a human",
                "connect me to an agent",
                "real person please",
                "speak with support team",
            ],
            vec!["Connecting you with our support team now."],
        )
        .escalates()
        .with_tags(vec!["support"]),
        Intent::new(
            "complaint",
            vec![
                "i want to complain",
                "this is not working",
                "i am not happy with the service",
                "this service is terrible",
                "i want my money back now",
            ],
            vec!["Sorry to hear that. Let me get a team member to help you personally."],
        )
        .escalates()
        .with_tags(vec!["support"]),
    ]
});

/// Returns a fresh copy of the shipped knowledge base.
pub fn seed_intents() -> Vec<Intent> {
    SEED.clone()
}

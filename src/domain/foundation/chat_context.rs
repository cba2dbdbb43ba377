//! Typed conversation context supplied by the transport layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PaymentStatus;

/// Context the caller attaches to a chat message.
///
/// The engine reads exactly four keys: payment status for the premium
/// gate, and platform/name/email for response templating. Everything else
/// a transport might know about the session stays on the transport side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatContext {
    pub payment_status: PaymentStatus,
    pub platform: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ChatContext {
    /// Creates an empty context (pending payment, no profile details).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with just a payment status.
    pub fn with_payment_status(status: PaymentStatus) -> Self {
        Self {
            payment_status: status,
            ..Self::default()
        }
    }

    /// Sets the platform the user is recovering.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Sets the user's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the user's contact email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds a context from a loosely-typed JSON object.
    ///
    /// Transports forward context as free-form JSON; missing keys and
    /// values of unexpected type are treated as absent rather than errors.
    pub fn from_value(value: &Value) -> Self {
        let read_string = |key: &str| -> Option<String> {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let payment_status = read_string("paymentStatus")
            .map(|s| PaymentStatus::from_str_lenient(&s))
            .unwrap_or_default();

        Self {
            payment_status,
            platform: read_string("platform"),
            name: read_string("name"),
            email: read_string("email"),
        }
    }

    /// Returns true if the session's recovery request is paid for.
    pub fn has_paid(&self) -> bool {
        self.payment_status.is_paid()
    }
}

//! PaymentStatus enum mirroring the request lifecycle owned by collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment state of the recovery request a chat session belongs to.
///
/// The engine never mutates this; it only gates premium responses on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    /// Returns true if premium content may be served.
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }

    /// Parses a caller-supplied status string without failing.
    ///
    /// Matching is case-insensitive; anything unrecognized degrades to
    /// `Pending` so an odd upstream value can never unlock the gate.
    pub fn from_str_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "paid" => PaymentStatus::Paid,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Pending,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }

    #[test]
    fn only_paid_unlocks_premium_content() {
        assert!(PaymentStatus::Paid.is_paid());
        assert!(!PaymentStatus::Pending.is_paid());
        assert!(!PaymentStatus::Failed.is_paid());
    }

    #[test]
    fn lenient_parse_accepts_mixed_case() {
        assert_eq!(PaymentStatus::from_str_lenient("PAID"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::from_str_lenient("Paid"), PaymentStatus::Paid);
        assert_eq!(
            PaymentStatus::from_str_lenient("  failed "),
            PaymentStatus::Failed
        );
    }

    #[test]
    fn lenient_parse_degrades_unknown_values_to_pending() {
        assert_eq!(
            PaymentStatus::from_str_lenient("successful"),
            PaymentStatus::Pending
        );
        assert_eq!(PaymentStatus::from_str_lenient(""), PaymentStatus::Pending);
    }

    #[test]
    fn serializes_to_lowercase_json() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Paid).unwrap(),
            "\"paid\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn deserializes_from_lowercase_json() {
        let status: PaymentStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, PaymentStatus::Failed);
    }
}

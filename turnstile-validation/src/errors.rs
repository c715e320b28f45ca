// Validator outcomes

use crate::Message;
use thiserror::Error;

/// Failure outcomes from running a validator.
///
/// The two conditions are distinct variants, never a generic string a caller
/// has to pattern-match on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// The validator was run with an empty rule set. A caller error,
    /// surfaced instead of silently succeeding.
    #[error("attempted to run a validator with an empty rule set")]
    NoRulesConfigured,

    /// One or more rules failed; the message carries the per-field reasons.
    #[error("validation failed")]
    Failed(Message),
}

impl ValidateError {
    /// The aggregated failure message, when validation itself failed.
    pub fn message(&self) -> Option<&Message> {
        match self {
            ValidateError::Failed(message) => Some(message),
            ValidateError::NoRulesConfigured => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rules_has_no_message() {
        assert!(ValidateError::NoRulesConfigured.message().is_none());
    }

    #[test]
    fn test_failed_carries_message() {
        let mut message = Message::new();
        message.add("age", "age must be an integer");

        let err = ValidateError::Failed(message.clone());
        assert_eq!(err.message(), Some(&message));
        assert_eq!(err.to_string(), "validation failed");
    }
}

// Validator: binds a request to an ordered rule list and runs them

use crate::{Message, RequestView, Rule, ValidateError};

/// Runs an ordered list of rules against one request.
///
/// Rules execute strictly in list order and failure reasons for a field
/// accumulate in that same order; both orders are observable contracts. A
/// validator belongs to a single request-handling flow and is discarded with
/// it; it is not meant to be shared across threads.
pub struct Validator<'a> {
    request: &'a dyn RequestView,
    rules: Vec<Rule>,
}

impl<'a> Validator<'a> {
    /// Create a validator with an empty rule list, triggering request
    /// parameter parsing if it has not happened yet.
    pub fn new(request: &'a dyn RequestView) -> Self {
        request.ensure_parsed();
        Self {
            request,
            rules: Vec::new(),
        }
    }

    /// Create a validator seeded with rules.
    pub fn with_rules(request: &'a dyn RequestView, rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut validator = Self::new(request);
        validator.add_rules(rules);
        validator
    }

    /// Append rules. No deduplication; order is preserved and is the
    /// execution order.
    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        self.rules.extend(rules);
    }

    /// Number of rules currently configured.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Run every rule in order and aggregate failures per field.
    ///
    /// Running with an empty rule list is a caller error and returns
    /// [`ValidateError::NoRulesConfigured`] rather than silently succeeding.
    /// Checks are not retried; one failing invocation contributes exactly
    /// one reason.
    pub fn run(&self) -> Result<(), ValidateError> {
        if self.rules.is_empty() {
            return Err(ValidateError::NoRulesConfigured);
        }

        log::debug!("running {} validation rules", self.rules.len());

        let mut message = Message::new();
        for rule in &self.rules {
            if let Err(reason) = rule.check.run(self.request, &rule.field, &rule.options) {
                message.add(rule.field.clone(), reason);
            }
        }

        if message.is_empty() {
            Ok(())
        } else {
            log::debug!(
                "validation failed: {} reasons across {} fields",
                message.total(),
                message.field_count()
            );
            Err(ValidateError::Failed(message))
        }
    }
}

/// One-shot helper: build a validator from the rules and run it. The easiest
/// path when there is no logic around adding rules.
pub fn check(
    request: &dyn RequestView,
    rules: impl IntoIterator<Item = Rule>,
) -> Result<(), ValidateError> {
    Validator::with_rules(request, rules).run()
}

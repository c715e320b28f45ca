// Rule representation

use crate::{Check, Options};

/// A check to run on one field of a request: the field name, the check
/// itself, and the options the check reads.
///
/// Rules are immutable once constructed; equality is structural. Many rules
/// may reference the same check with different fields or options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Field in the request to check.
    pub field: String,
    /// Check to run against the field.
    pub check: Check,
    /// Parameters passed through to the check.
    pub options: Options,
}

impl Rule {
    /// Create a rule with no options.
    pub fn new(field: impl Into<String>, check: Check) -> Self {
        Self {
            field: field.into(),
            check,
            options: Options::new(),
        }
    }

    /// Create a rule carrying options for its check.
    pub fn with_options(field: impl Into<String>, check: Check, options: Options) -> Self {
        Self {
            field: field.into(),
            check,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_empty_options() {
        let rule = Rule::new("forename", Check::Alpha);

        assert_eq!(rule.field, "forename");
        assert_eq!(rule.check, Check::Alpha);
        assert!(rule.options.is_empty());
    }

    #[test]
    fn test_structural_equality() {
        let a = Rule::with_options("n", Check::MaxLength, Options::new().with("length", 5));
        let b = Rule::with_options("n", Check::MaxLength, Options::new().with("length", 5));
        let c = Rule::with_options("n", Check::MaxLength, Options::new().with("length", 6));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

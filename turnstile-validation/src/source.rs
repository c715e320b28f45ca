// Request parameter access for checks

use std::collections::HashMap;
use turnstile_core::HttpRequest;

/// View over the flat, string-valued parameters of an incoming request.
///
/// Checks read through this trait only; they never see the transport. The
/// one mutation a view may perform is the idempotent lazy parse triggered by
/// `ensure_parsed`.
pub trait RequestView {
    /// Trigger parameter parsing if it has not happened yet. Idempotent.
    fn ensure_parsed(&self);

    /// Whether the field is present in the parameter set (its value may be
    /// empty).
    fn has_field(&self, name: &str) -> bool;

    /// First value for the field, or the empty string if absent.
    fn field(&self, name: &str) -> &str;
}

impl RequestView for HttpRequest {
    fn ensure_parsed(&self) {
        HttpRequest::ensure_parsed(self);
    }

    fn has_field(&self, name: &str) -> bool {
        self.has_param(name)
    }

    fn field(&self, name: &str) -> &str {
        self.param(name)
    }
}

/// Plain parameter maps work as a view, which keeps the engine testable
/// without HTTP plumbing.
impl RequestView for HashMap<String, Vec<String>> {
    fn ensure_parsed(&self) {}

    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn field(&self, name: &str) -> &str {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_request_view() {
        let request = HttpRequest::new("GET", "/x").with_query("name=Ada&empty=");
        let view: &dyn RequestView = &request;
        view.ensure_parsed();

        assert!(view.has_field("name"));
        assert_eq!(view.field("name"), "Ada");
        assert!(view.has_field("empty"));
        assert_eq!(view.field("empty"), "");
        assert!(!view.has_field("missing"));
        assert_eq!(view.field("missing"), "");
    }

    #[test]
    fn test_map_view() {
        let mut params: HashMap<String, Vec<String>> = HashMap::new();
        params.insert("tag".to_string(), vec!["a".to_string(), "b".to_string()]);

        assert!(params.has_field("tag"));
        assert_eq!(params.field("tag"), "a");
        assert_eq!(params.field("other"), "");
    }
}

// HTTP request and response types

use crate::{form, Error, Extensions};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP request wrapper.
///
/// Parameters are parsed lazily, once, from the query string merged with an
/// `application/x-www-form-urlencoded` body. A source that fails to decode
/// contributes no parameters; it never aborts the request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
    pub extensions: Extensions,
    params: OnceCell<HashMap<String, Vec<String>>>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query: String::new(),
            headers: HashMap::new(),
            body: Vec::new(),
            extensions: Extensions::new(),
            params: OnceCell::new(),
        }
    }

    /// Set the raw query string (without the leading `?`).
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Set an url-encoded form body and the matching content type.
    pub fn with_form_body(self, pairs: &[(&str, &str)]) -> Result<Self, Error> {
        let body = form::to_body(pairs)?;
        Ok(self
            .with_header("Content-Type", "application/x-www-form-urlencoded")
            .with_body(body))
    }

    /// Get a header value by name
    pub fn header(&self, name: &str) -> Option<&String> {
        self.headers.get(name)
    }

    /// Parse the request body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|e| Error::Deserialization(e.to_string()))
    }

    /// Populate the parameter map if that has not happened yet. Idempotent.
    pub fn ensure_parsed(&self) {
        let _ = self.parsed();
    }

    /// Whether the parameter is present at all (its value may be empty).
    pub fn has_param(&self, name: &str) -> bool {
        self.parsed().contains_key(name)
    }

    /// First value for the parameter, or the empty string if absent.
    pub fn param(&self, name: &str) -> &str {
        self.parsed()
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All parsed parameters, keyed by name.
    pub fn params(&self) -> &HashMap<String, Vec<String>> {
        self.parsed()
    }

    fn parsed(&self) -> &HashMap<String, Vec<String>> {
        self.params.get_or_init(|| {
            let mut params: HashMap<String, Vec<String>> = HashMap::new();
            let mut absorb = |raw: &[u8], what: &str| match form::parse_pairs(raw) {
                Ok(pairs) => {
                    for (name, value) in pairs {
                        params.entry(name).or_default().push(value);
                    }
                }
                Err(err) => log::warn!("ignoring unparseable {}: {}", what, err),
            };

            absorb(self.query.as_bytes(), "query string");
            if self.is_form_encoded() {
                absorb(&self.body, "form body");
            }

            log::debug!("parsed {} request parameters", params.len());
            params
        })
    }

    fn is_form_encoded(&self) -> bool {
        self.headers
            .get("Content-Type")
            .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false)
    }
}

/// HTTP response wrapper
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn ok() -> Self {
        Self::new(200)
    }

    pub fn bad_request() -> Self {
        Self::new(400)
    }

    pub fn unprocessable_entity() -> Self {
        Self::new(422)
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn with_json<T: Serialize>(mut self, value: &T) -> Result<Self, Error> {
        self.body =
            serde_json::to_vec(value).map_err(|e| Error::Serialization(e.to_string()))?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

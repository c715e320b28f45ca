// Turnstile - declarative validation for web request parameters
//
// This library lets handlers declare named checks against named request
// fields and collect structured, per-field failure messages.

// Re-export core HTTP types
pub use turnstile_core::*;

// Re-export the validation engine
pub use turnstile_validation::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use turnstile_core::{Error, Extensions, HttpRequest, HttpResponse};
    pub use turnstile_validation::{
        check, respond, Check, Message, Options, OptionValue, RequestView, Rule, ValidateError,
        Validator,
    };
}

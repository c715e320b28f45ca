//! Rule-based validation for Turnstile requests
//!
//! Handlers declare which check runs against which request field, run the
//! set, and collect per-field failure messages.
//!
//! # Examples
//!
//! ## Checking a request
//!
//! ```
//! use turnstile_core::HttpRequest;
//! use turnstile_validation::{check, Check, Rule};
//!
//! let request = HttpRequest::new("GET", "/signup").with_query("forename=Ada&age=36");
//!
//! let outcome = check(
//!     &request,
//!     vec![
//!         Rule::new("forename", Check::Alpha),
//!         Rule::new("age", Check::Integer),
//!     ],
//! );
//! assert!(outcome.is_ok());
//! ```
//!
//! ## Collecting failure messages
//!
//! ```
//! use turnstile_core::HttpRequest;
//! use turnstile_validation::{check, respond, Check, Rule};
//!
//! let request = HttpRequest::new("POST", "/signup").with_query("age=abc");
//!
//! let outcome = check(
//!     &request,
//!     vec![
//!         Rule::new("forename", Check::Required),
//!         Rule::new("age", Check::Integer),
//!     ],
//! );
//!
//! let err = outcome.unwrap_err();
//! let message = err.message().unwrap();
//! assert_eq!(message.reasons("age"), ["age must be an integer"]);
//!
//! let response = respond(message);
//! assert_eq!(response.status, 422);
//! ```
//!
//! ## Parameterized rules
//!
//! ```
//! use turnstile_core::HttpRequest;
//! use turnstile_validation::{check, Check, Options, Rule};
//!
//! let request = HttpRequest::new("GET", "/signup").with_query("handle=ada");
//!
//! let outcome = check(
//!     &request,
//!     vec![Rule::with_options(
//!         "handle",
//!         Check::MinLength,
//!         Options::new().with("length", 2),
//!     )],
//! );
//! assert!(outcome.is_ok());
//! ```

mod checks;
mod context;
mod dates;
mod errors;
mod message;
mod mx;
mod options;
mod respond;
mod rules;
mod source;
mod validator;

pub use checks::*;
pub use context::*;
pub use errors::*;
pub use message::*;
pub use options::*;
pub use respond::*;
pub use rules::*;
pub use source::*;
pub use validator::*;

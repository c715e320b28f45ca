//! Core HTTP types for Turnstile
//!
//! Thin request and response wrappers the validation engine binds to. The
//! request carries a lazily parsed parameter map (query string merged with an
//! url-encoded form body) and a typed extensions container for
//! request-scoped state; the response offers JSON body builders. The HTTP
//! server that produces requests and consumes responses lives elsewhere.

mod error;
mod extensions;
pub mod form;
mod http;

pub use error::*;
pub use extensions::*;
pub use http::*;

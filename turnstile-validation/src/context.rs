// Propagating validation results to downstream handlers

use crate::Message;
use turnstile_core::HttpRequest;

/// Prior validation result carried on a request, so downstream handlers can
/// read the outcome without re-running the checks.
///
/// Stored in the request's typed extensions, so there is exactly one
/// well-known slot for it - no stringly-keyed bag.
#[derive(Debug, Clone)]
pub struct PriorValidation(pub Message);

/// Attach a failure message to the request.
pub fn attach(request: &mut HttpRequest, message: Message) {
    request.extensions.insert(PriorValidation(message));
}

/// The failure message from an earlier validation pass, if one was attached.
pub fn retrieve(request: &HttpRequest) -> Option<&Message> {
    request
        .extensions
        .get::<PriorValidation>()
        .map(|prior| &prior.0)
}

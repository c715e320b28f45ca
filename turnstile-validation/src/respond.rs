// Response writer for failed validation

use crate::Message;
use turnstile_core::HttpResponse;

/// Serialize a failure message into the standard 422 payload.
///
/// Body shape is an object of arrays, `{"errors": {"<field>": ["<reason>",
/// ...]}}` - other services depend on this exact structure.
pub fn respond(message: &Message) -> HttpResponse {
    HttpResponse::unprocessable_entity()
        .with_header("Content-Type", "application/json")
        .with_body(message.to_json().to_string().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_sets_status_and_content_type() {
        let mut message = Message::new();
        message.add("age", "age must be an integer");

        let response = respond(&message);

        assert_eq!(response.status, 422);
        assert_eq!(response.headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_respond_body_is_object_of_arrays() {
        let mut message = Message::new();
        message.add("age", "age must be an integer");
        message.add("age", "age must be a boolean value");
        message.add("forename", "forename is required");

        let response = respond(&message);
        let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "errors": {
                    "age": ["age must be an integer", "age must be a boolean value"],
                    "forename": ["forename is required"],
                }
            })
        );
    }
}

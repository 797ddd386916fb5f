//! Response builders for the API handler.
//!
//! The wire shape follows the API Gateway proxy integration: a JSON object
//! with `statusCode`, `headers`, and a stringified `body`.

use serde_json::{Value, json};

/// Returns the fixed 200 greeting response.
///
/// The body is a JSON-encoded string; `headers` carries exactly
/// `Content-Type: application/json`. Pure and synchronous, a fresh value
/// per call.
#[must_use]
pub fn ok_greeting() -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "message": "Hello, World!" }).to_string()
    })
}

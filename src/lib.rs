/// Greeting - a single-endpoint serverless function that returns a fixed
/// JSON greeting.
///
/// This crate implements one API Lambda: it accepts any invocation payload,
/// ignores it, and responds with a 200 and the constant body
/// `{"message": "Hello, World!"}`.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - Tokio for async runtime
/// - serde_json for the API Gateway response shape
///
/// # Example
///
/// ```
/// let response = greeting::api::helpers::ok_greeting();
///
/// assert_eq!(response["statusCode"], 200);
/// assert_eq!(response["headers"]["Content-Type"], "application/json");
/// ```
// Module declarations
pub mod api;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// greeting::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}

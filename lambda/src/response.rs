//! Builders for the `{statusCode, body}` object returned to the Lambda invoker.

use serde_json::json;

use crate::core::models::{LambdaResponse, PublishResult};
use crate::errors::RelayError;

/// Body returned once the queue has acknowledged the message.
pub const MESSAGE_SENT: &str = "Message sent";

/// Greeting returned by the report function.
pub const REPORT_GREETING: &str = "Hello World from SNS Lambda!";

/// Returns a 200 response with a plain-text body.
#[must_use]
pub fn ok_text(body: &str) -> LambdaResponse {
    LambdaResponse {
        status_code: 200,
        body: body.to_string(),
    }
}

/// Returns a 200 response whose body is `{"message": ...}`.
#[must_use]
pub fn ok_message(message: &str) -> LambdaResponse {
    LambdaResponse {
        status_code: 200,
        body: json!({ "message": message }).to_string(),
    }
}

/// Returns the acknowledgment for a submitted message.
#[must_use]
pub fn message_sent() -> LambdaResponse {
    ok_text(MESSAGE_SENT)
}

/// Returns a non-200 response describing a failed publish.
///
/// The status code tells configuration problems (500) apart from queue
/// failures (502); the body is the serialized failed [`PublishResult`].
#[must_use]
pub fn publish_failure(error: &RelayError) -> LambdaResponse {
    let result = PublishResult::failed(error.to_string());
    let body = serde_json::to_string(&result)
        .unwrap_or_else(|_| json!({ "status": "failure" }).to_string());

    LambdaResponse {
        status_code: error.status_code(),
        body,
    }
}

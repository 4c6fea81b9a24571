use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Trigger payload. Accepted as-is, never inspected.
pub type InboundEvent = Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub destination: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Success,
    Failure,
}

/// Outcome of one publish attempt. Success means the queue accepted the
/// message, not that it was delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResult {
    pub status: PublishStatus,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl PublishResult {
    #[must_use]
    pub fn submitted(message_id: Option<String>) -> Self {
        Self {
            status: PublishStatus::Success,
            detail: "message submitted".to_string(),
            message_id,
        }
    }

    #[must_use]
    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            status: PublishStatus::Failure,
            detail: detail.into(),
            message_id: None,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == PublishStatus::Success
    }
}

/// Object returned to the Lambda invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

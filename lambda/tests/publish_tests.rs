use std::sync::Mutex;

use async_trait::async_trait;
use lambda_runtime::{Context, LambdaEvent};
use relay::core::config::PublisherConfig;
use relay::core::models::{OutboundMessage, PublishStatus};
use relay::errors::RelayError;
use relay::publish::{MessagePublisher, adapter, handler};
use serde_json::{Value, json};

/// Publisher stub that records every submission and answers with a fixed outcome.
struct RecordingPublisher {
    calls: Mutex<Vec<OutboundMessage>>,
    failure: Option<String>,
}

impl RecordingPublisher {
    fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    fn failing(reason: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(reason.to_string()),
        }
    }

    fn calls(&self) -> Vec<OutboundMessage> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagePublisher for RecordingPublisher {
    async fn publish(&self, message: &OutboundMessage) -> Result<Option<String>, RelayError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(message.clone());
        match &self.failure {
            Some(reason) => Err(RelayError::Publish(reason.clone())),
            None => Ok(Some(format!("msg-{}", calls.len()))),
        }
    }
}

fn config(destination: &str) -> PublisherConfig {
    PublisherConfig::from_lookup(|key| match key {
        "QUEUE_URL" => Some(destination.to_string()),
        _ => None,
    })
}

fn lambda_event(payload: Value) -> LambdaEvent<Value> {
    LambdaEvent::new(payload, Context::default())
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapter
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_handle_submits_one_message_to_configured_queue() {
    let publisher = RecordingPublisher::succeeding();

    let result = adapter::handle(&json!({}), &config("queue-A"), &publisher)
        .await
        .unwrap();

    let calls = publisher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].destination, "queue-A");
    assert_eq!(calls[0].body, "hello world");

    assert_eq!(result.status, PublishStatus::Success);
    assert_eq!(result.detail, "message submitted");
    assert_eq!(result.message_id.as_deref(), Some("msg-1"));
}

#[tokio::test]
async fn test_handle_sends_destination_exactly_as_configured() {
    let publisher = RecordingPublisher::succeeding();
    let config = config(" queue-A ");

    let result = adapter::handle(&json!({}), &config, &publisher).await;

    assert!(result.is_ok());
    let calls = publisher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].destination, config.destination_address);
}

#[tokio::test]
async fn test_handle_ignores_event_contents() {
    let publisher = RecordingPublisher::succeeding();
    let events = [
        json!({}),
        json!(null),
        json!("plain string"),
        json!([1, 2, 3]),
        json!({"Records": [{"body": "something else"}], "QUEUE_URL": "queue-B"}),
    ];

    for event in &events {
        let result = adapter::handle(event, &config("queue-A"), &publisher).await;
        assert!(result.unwrap().is_success());
    }

    let calls = publisher.calls();
    assert_eq!(calls.len(), events.len());
    assert!(calls.iter().all(|m| m.destination == "queue-A"));
    assert!(calls.iter().all(|m| m.body == "hello world"));
}

#[tokio::test]
async fn test_handle_uses_configured_body() {
    let publisher = RecordingPublisher::succeeding();
    let config = PublisherConfig {
        destination_address: "queue-A".to_string(),
        message_body: "{\"kind\":\"ping\"}".to_string(),
    };

    adapter::handle(&json!({}), &config, &publisher).await.unwrap();

    assert_eq!(publisher.calls()[0].body, "{\"kind\":\"ping\"}");
}

#[tokio::test]
async fn test_handle_missing_destination_never_calls_publisher() {
    let publisher = RecordingPublisher::succeeding();
    let unset = PublisherConfig::from_lookup(|_| None);

    for config in [unset, config(""), config("   ")] {
        let result = adapter::handle(&json!({}), &config, &publisher).await;
        match result {
            Err(RelayError::Configuration(_)) => {}
            other => panic!("Expected Configuration error, got: {other:?}"),
        }
    }

    assert!(publisher.calls().is_empty());
}

#[tokio::test]
async fn test_handle_surfaces_publish_error_without_retry() {
    let publisher = RecordingPublisher::failing("service unavailable");

    let result = adapter::handle(&json!({}), &config("queue-A"), &publisher).await;

    match result {
        Err(RelayError::Publish(msg)) => assert_eq!(msg, "service unavailable"),
        other => panic!("Expected Publish error, got: {other:?}"),
    }
    assert_eq!(publisher.calls().len(), 1);
}

#[tokio::test]
async fn test_handle_does_not_deduplicate() {
    let publisher = RecordingPublisher::succeeding();
    let config = config("queue-A");
    let event = json!({"id": "same"});

    let first = adapter::handle(&event, &config, &publisher).await.unwrap();
    let second = adapter::handle(&event, &config, &publisher).await.unwrap();

    assert_eq!(publisher.calls().len(), 2);
    assert_ne!(first.message_id, second.message_id);
}

#[tokio::test]
async fn test_handle_accepts_trait_object_publisher() {
    let publisher = RecordingPublisher::succeeding();
    let dyn_publisher: &dyn MessagePublisher = &publisher;

    let result = adapter::handle(&json!({}), &config("queue-A"), dyn_publisher).await;

    assert!(result.is_ok());
    assert_eq!(publisher.calls().len(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Lambda handler
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_handler_returns_message_sent() {
    let publisher = RecordingPublisher::succeeding();

    let response = handler(lambda_event(json!({})), &config("queue-A"), &publisher)
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "Message sent");
    assert_eq!(publisher.calls().len(), 1);
}

#[tokio::test]
async fn test_handler_response_serializes_status_code_key() {
    let publisher = RecordingPublisher::succeeding();

    let response = handler(lambda_event(json!({})), &config("queue-A"), &publisher)
        .await
        .unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value, json!({"statusCode": 200, "body": "Message sent"}));
}

#[tokio::test]
async fn test_handler_reports_configuration_error_as_500() {
    let publisher = RecordingPublisher::succeeding();

    let response = handler(lambda_event(json!({})), &config(""), &publisher)
        .await
        .unwrap();

    assert_eq!(response.status_code, 500);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "failure");
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid configuration"));
    assert!(publisher.calls().is_empty());
}

#[tokio::test]
async fn test_handler_reports_publish_error_as_502() {
    let publisher = RecordingPublisher::failing("AccessDenied");

    let response = handler(lambda_event(json!({})), &config("queue-A"), &publisher)
        .await
        .unwrap();

    assert_eq!(response.status_code, 502);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "failure");
    assert_eq!(body["detail"], "Failed to publish message: AccessDenied");
    assert_eq!(publisher.calls().len(), 1);
}

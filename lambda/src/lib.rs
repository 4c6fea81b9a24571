//! Relay - a pair of AWS Lambda functions around a managed message queue.
//!
//! 1. A publish Lambda that turns every invocation into exactly one SQS message
//! 2. A report Lambda that logs the invocation and the deployment's resource identifiers
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - SQS as the destination queue, reached through the [`publish::MessagePublisher`] seam
//! - Tokio for async runtime
//!
//! Configuration is read once at process start and passed into the handlers.
//!
//! # Example
//!
//! ```no_run
//! use relay::core::config::PublisherConfig;
//! use relay::publish::{SqsPublisher, adapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     relay::setup_logging();
//!
//!     let config = PublisherConfig {
//!         destination_address: "https://sqs.eu-central-1.amazonaws.com/123456789012/queue-A".to_string(),
//!         message_body: "hello world".to_string(),
//!     };
//!
//!     let publisher = SqsPublisher::shared().await;
//!     let result = adapter::handle(&serde_json::json!({}), &config, publisher).await?;
//!     println!("{}: {:?}", result.detail, result.message_id);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod core;
pub mod errors;
pub mod publish;
pub mod report;
pub mod response;

pub use errors::RelayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Records above INFO are dropped unless the
/// `debug-logs` feature is enabled. It should be called once at process start.
///
/// # Example
///
/// ```
/// relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    #[cfg(feature = "debug-logs")]
    let max_level = LevelFilter::DEBUG;
    #[cfg(not(feature = "debug-logs"))]
    let max_level = LevelFilter::INFO;

    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(max_level)
        .init();
}

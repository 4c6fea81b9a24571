//! Outbound queue access.

use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use tokio::sync::OnceCell;
use tracing::info;

use crate::core::models::OutboundMessage;
use crate::errors::RelayError;

/// Submits a single message to an external queue.
///
/// Implementations make exactly one submission attempt per call and return the
/// queue-assigned message id when the service reports one.
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    async fn publish(&self, message: &OutboundMessage) -> Result<Option<String>, RelayError>;
}

static SHARED_PUBLISHER: OnceCell<SqsPublisher> = OnceCell::const_new();

/// [`MessagePublisher`] backed by Amazon SQS `SendMessage`.
#[derive(Debug, Clone)]
pub struct SqsPublisher {
    client: SqsClient,
}

impl SqsPublisher {
    #[must_use]
    pub fn new(client: SqsClient) -> Self {
        Self { client }
    }

    /// Process-wide publisher, built from the default AWS config chain on first use.
    pub async fn shared() -> &'static SqsPublisher {
        SHARED_PUBLISHER
            .get_or_init(|| async {
                let shared_config = aws_config::from_env().load().await;
                info!(region = ?shared_config.region(), "Initialized SQS client");
                SqsPublisher::new(SqsClient::new(&shared_config))
            })
            .await
    }
}

#[async_trait]
impl MessagePublisher for SqsPublisher {
    async fn publish(&self, message: &OutboundMessage) -> Result<Option<String>, RelayError> {
        let output = self
            .client
            .send_message()
            .queue_url(&message.destination)
            .message_body(&message.body)
            .send()
            .await?;

        Ok(output.message_id().map(ToString::to_string))
    }
}

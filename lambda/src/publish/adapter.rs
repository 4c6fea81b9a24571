use tracing::{error, info};

use super::publisher::MessagePublisher;
use crate::core::config::PublisherConfig;
use crate::core::models::{InboundEvent, OutboundMessage, PublishResult};
use crate::errors::RelayError;

/// Relay one inbound event to the configured queue.
///
/// The event is not inspected. Exactly one message is built and handed to
/// `publisher`, and its outcome is returned as-is: nothing is retried here.
///
/// # Errors
///
/// Returns [`RelayError::Configuration`] without contacting the publisher when the
/// destination is empty, and [`RelayError::Publish`] when the submission fails.
pub async fn handle<P>(
    _event: &InboundEvent,
    config: &PublisherConfig,
    publisher: &P,
) -> Result<PublishResult, RelayError>
where
    P: MessagePublisher + ?Sized,
{
    let message = build_message(config)?;

    #[cfg(feature = "debug-logs")]
    tracing::debug!(destination = %message.destination, body = %message.body, "Submitting message");
    #[cfg(not(feature = "debug-logs"))]
    tracing::debug!(destination = %message.destination, "Submitting message");

    match publisher.publish(&message).await {
        Ok(message_id) => {
            info!(
                destination = %message.destination,
                message_id = message_id.as_deref().unwrap_or(""),
                "Message submitted"
            );
            Ok(PublishResult::submitted(message_id))
        }
        Err(e) => {
            error!(destination = %message.destination, "Publish failed: {}", e);
            Err(e)
        }
    }
}

fn build_message(config: &PublisherConfig) -> Result<OutboundMessage, RelayError> {
    if config.destination_address.trim().is_empty() {
        error!("Destination address is not configured");
        return Err(RelayError::Configuration(
            "QUEUE_URL is empty or unset".to_string(),
        ));
    }

    Ok(OutboundMessage {
        destination: config.destination_address.clone(),
        body: config.message_body.clone(),
    })
}

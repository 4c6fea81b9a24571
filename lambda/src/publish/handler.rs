use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use super::adapter;
use super::publisher::MessagePublisher;
use crate::core::config::PublisherConfig;
use crate::core::models::LambdaResponse;
use crate::response;

/// Lambda handler for the publish entrypoint.
///
/// Adapter failures are reported in the response (500 for configuration, 502 for
/// the queue) rather than as a runtime error; the adapter has already logged them.
///
/// # Errors
///
/// Never fails for adapter outcomes; the `Result` is required by the runtime.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler<P>(
    event: LambdaEvent<Value>,
    config: &PublisherConfig,
    publisher: &P,
) -> Result<LambdaResponse, Error>
where
    P: MessagePublisher + ?Sized,
{
    match adapter::handle(&event.payload, config, publisher).await {
        Ok(_) => Ok(response::message_sent()),
        Err(e) => Ok(response::publish_failure(&e)),
    }
}

pub use self::function_handler as handler;

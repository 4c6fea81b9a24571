use lambda_runtime::{Error, LambdaEvent, service_fn};
use relay::core::config::PublisherConfig;
use relay::publish::{SqsPublisher, handler};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    relay::setup_logging();

    let config = PublisherConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let publisher = SqsPublisher::shared().await;

    let config = &config;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(event, config, publisher).await
    }))
    .await
}

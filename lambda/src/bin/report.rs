use lambda_runtime::{Error, LambdaEvent, service_fn};
use relay::core::config::ReportConfig;
use relay::report::handler;
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    relay::setup_logging();

    let config = ReportConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let config = &config;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(event, config).await
    }))
    .await
}

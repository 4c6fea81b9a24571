use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::core::config::ReportConfig;
use crate::core::models::LambdaResponse;
use crate::response;

/// Lambda handler for the report entrypoint.
///
/// # Errors
///
/// Never fails; the `Result` is required by the runtime.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    config: &ReportConfig,
) -> Result<LambdaResponse, Error> {
    log_invocation(&event.context);
    Ok(report(&event.payload, config))
}

/// Log the event and every configured identifier, then answer with the greeting.
#[must_use]
pub fn report(event: &Value, config: &ReportConfig) -> LambdaResponse {
    let pretty = serde_json::to_string_pretty(event).unwrap_or_else(|_| event.to_string());
    info!("Event: {}", pretty);
    info!("{}", response::REPORT_GREETING);

    for (name, value) in config.entries() {
        info!("{}: {}", name, value.unwrap_or("<unset>"));
    }

    response::ok_message(response::REPORT_GREETING)
}

fn log_invocation(ctx: &Context) {
    info!(
        request_id = %ctx.request_id,
        function_arn = %ctx.invoked_function_arn,
        function_name = %ctx.env_config.function_name,
        function_version = %ctx.env_config.version,
        "Invocation received"
    );
}

pub use self::function_handler as handler;

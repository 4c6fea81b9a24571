use std::convert::Infallible;
use std::env;

/// Body sent when `MESSAGE_BODY` is not configured.
pub const DEFAULT_MESSAGE_BODY: &str = "hello world";

/// Configuration for the publish function.
///
/// `destination_address` may be empty here; the adapter rejects it at handle time.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    pub destination_address: String,
    pub message_body: String,
}

impl PublisherConfig {
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not valid Unicode.
    pub fn from_env() -> Result<Self, String> {
        Self::try_from_lookup(read_var)
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let Ok(config) = Self::try_from_lookup(|key| Ok::<_, Infallible>(lookup(key)));
        config
    }

    /// # Errors
    ///
    /// Returns the first error reported by `lookup`.
    pub fn try_from_lookup<F, E>(lookup: F) -> Result<Self, E>
    where
        F: Fn(&str) -> Result<Option<String>, E>,
    {
        Ok(Self {
            destination_address: lookup("QUEUE_URL")?.unwrap_or_default(),
            message_body: lookup("MESSAGE_BODY")?
                .unwrap_or_else(|| DEFAULT_MESSAGE_BODY.to_string()),
        })
    }
}

/// Informational identifiers reported by the report function. None of them
/// influences control flow.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub sqs_queue_url: Option<String>,
    pub sqs_queue_arn: Option<String>,
    pub s3_bucket_name: Option<String>,
    pub s3_bucket_arn: Option<String>,
    pub sns_topic_arn: Option<String>,
}

impl ReportConfig {
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not valid Unicode.
    pub fn from_env() -> Result<Self, String> {
        Self::try_from_lookup(read_var)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let Ok(config) = Self::try_from_lookup(|key| Ok::<_, Infallible>(lookup(key)));
        config
    }

    /// # Errors
    ///
    /// Returns the first error reported by `lookup`.
    pub fn try_from_lookup<F, E>(lookup: F) -> Result<Self, E>
    where
        F: Fn(&str) -> Result<Option<String>, E>,
    {
        Ok(Self {
            sqs_queue_url: lookup("SQS_QUEUE_URL")?,
            sqs_queue_arn: lookup("SQS_QUEUE_ARN")?,
            s3_bucket_name: lookup("S3_BUCKET_NAME")?,
            s3_bucket_arn: lookup("S3_BUCKET_ARN")?,
            sns_topic_arn: lookup("SNS_TOPIC_ARN")?,
        })
    }

    /// Identifiers paired with the environment variable they came from, in report order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("SQS_QUEUE_URL", self.sqs_queue_url.as_deref()),
            ("SQS_QUEUE_ARN", self.sqs_queue_arn.as_deref()),
            ("S3_BUCKET_NAME", self.s3_bucket_name.as_deref()),
            ("S3_BUCKET_ARN", self.s3_bucket_arn.as_deref()),
            ("SNS_TOPIC_ARN", self.sns_topic_arn.as_deref()),
        ]
    }
}

fn read_var(key: &str) -> Result<Option<String>, String> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(format!("{key}: {e}")),
    }
}

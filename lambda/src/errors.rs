use aws_sdk_sqs::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Failed to publish message: {0}")]
    Publish(String),
}

impl RelayError {
    /// HTTP-style status code reported to the invoker for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Configuration(_) => 500,
            RelayError::Publish(_) => 502,
        }
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<SdkError<E, R>> for RelayError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        RelayError::Publish(DisplayErrorContext(&error).to_string())
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Failed to serialize job payload: {0}")]
    SerializationError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),
}

impl From<serde_json::Error> for SubmitError {
    fn from(error: serde_json::Error) -> Self {
        SubmitError::SerializationError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_sqs::error::SdkError<E, R>> for SubmitError
where
    E: std::fmt::Display,
{
    fn from(error: aws_sdk_sqs::error::SdkError<E, R>) -> Self {
        SubmitError::AwsError(error.to_string())
    }
}

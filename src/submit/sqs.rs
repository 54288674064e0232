use crate::core::{models::JobMessage, targets};
use crate::errors::SubmitError;
use aws_sdk_sqs::Client as SqsClient;
use tracing::info;

/// Build an SQS client against the emulator endpoint.
pub async fn client() -> SqsClient {
    let shared_config = super::emulator_config().await;
    SqsClient::new(&shared_config)
}

/// # Errors
///
/// Returns an error if serialization fails or the message cannot be sent to
/// the input queue.
pub async fn send_job_message(client: &SqsClient, job: &JobMessage) -> Result<(), SubmitError> {
    let message_body = serde_json::to_string(job)
        .map_err(|e| SubmitError::SerializationError(format!("Failed to serialize job: {e}")))?;

    let output = client
        .send_message()
        .queue_url(targets::INPUT_QUEUE_URL)
        .message_body(message_body)
        .send()
        .await
        .map_err(|e| SubmitError::AwsError(format!("Failed to send message to SQS: {e}")))?;

    info!(
        message_id = output.message_id().unwrap_or("unknown"),
        queue_url = targets::INPUT_QUEUE_URL,
        "sent job message"
    );
    Ok(())
}

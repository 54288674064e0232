use crate::core::{models::JobMessage, targets};
use crate::errors::SubmitError;
use aws_sdk_kinesis::Client as KinesisClient;
use aws_sdk_kinesis::primitives::Blob;
use tracing::info;

/// Build a Kinesis client against the emulator endpoint.
pub async fn client() -> KinesisClient {
    let shared_config = super::emulator_config().await;
    KinesisClient::new(&shared_config)
}

/// # Errors
///
/// Returns an error if serialization fails or the record cannot be put on the
/// input stream.
pub async fn put_job_record(client: &KinesisClient, job: &JobMessage) -> Result<(), SubmitError> {
    let data = serde_json::to_string(job)
        .map_err(|e| SubmitError::SerializationError(format!("Failed to serialize job: {e}")))?;

    let output = client
        .put_record()
        .stream_arn(targets::INPUT_STREAM_ARN)
        .partition_key(targets::PARTITION_KEY)
        .data(Blob::new(data))
        .send()
        .await
        .map_err(|e| SubmitError::AwsError(format!("Failed to put record to Kinesis: {e}")))?;

    info!(
        shard_id = ?output.shard_id,
        sequence_number = ?output.sequence_number,
        stream_arn = targets::INPUT_STREAM_ARN,
        "put job record"
    );
    Ok(())
}

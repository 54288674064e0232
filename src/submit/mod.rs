//! One-shot transport calls against the local emulator.

pub mod kinesis;
pub mod sqs;

use crate::core::targets;

/// Load the shared AWS config pointed at the emulator endpoint.
///
/// Credential and region resolution stay entirely with the SDK's default
/// chain; only the endpoint is overridden.
pub async fn emulator_config() -> aws_config::SdkConfig {
    aws_config::from_env()
        .endpoint_url(targets::LOCALSTACK_ENDPOINT)
        .load()
        .await
}

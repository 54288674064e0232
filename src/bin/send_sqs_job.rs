use clap::Parser;
use job_submit::cli::JobArgs;
use job_submit::core::models::JobMessage;
use job_submit::submit::sqs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    job_submit::setup_logging();
    let args = JobArgs::parse();

    let client = sqs::client().await;
    let job = JobMessage::new(args.sleep_duration_seconds);
    sqs::send_job_message(&client, &job).await?;
    Ok(())
}

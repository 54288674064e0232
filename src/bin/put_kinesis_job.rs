use clap::Parser;
use job_submit::cli::JobArgs;
use job_submit::core::models::JobMessage;
use job_submit::submit::kinesis;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    job_submit::setup_logging();
    let args = JobArgs::parse();

    let client = kinesis::client().await;
    let job = JobMessage::new(args.sleep_duration_seconds);
    kinesis::put_job_record(&client, &job).await?;
    Ok(())
}

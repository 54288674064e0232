use clap::Parser;

/// Argument surface shared by both submitter binaries: a single positional
/// integer. Parsing happens before any AWS client is built, so a bad argument
/// exits without touching the network.
#[derive(Debug, Parser)]
pub struct JobArgs {
    /// Sleep duration in seconds carried in the job body.
    ///
    /// Any base-10 integer is accepted; no range check is applied, so
    /// negative or very large values are passed through unchanged.
    #[arg(value_name = "SLEEP_DURATION_SECONDS", allow_negative_numbers = true)]
    pub sleep_duration_seconds: i64,
}

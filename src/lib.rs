//! Local-testing job submitters.
//!
//! Two small command-line tools that push a synthetic job message into the
//! worker's input transports on a locally running AWS emulator:
//!
//! 1. `put-kinesis-job` puts a single record on the input Kinesis stream
//! 2. `send-sqs-job` sends a single message to the input SQS queue
//!
//! Both take one integer argument (a sleep duration in seconds), wrap it in a
//! one-field JSON body, and perform exactly one SDK call. There is no retry,
//! no batching, and no state; a parse or transport failure terminates the
//! process with a non-zero exit code.

// Module declarations
pub mod cli;
pub mod core;
pub mod errors;
pub mod submit;

/// Configure structured logging for the submitter binaries.
///
/// Sets up a tracing-subscriber fmt layer writing to the terminal. Call once
/// at the start of each binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}

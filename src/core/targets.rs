//! Fixed destinations on the local emulator.
//!
//! These are constants, not configuration: the submitters only exist to poke
//! the worker's input transports on a LocalStack instance, so the endpoint,
//! stream and queue are pinned to the values the local compose stack creates.

/// Emulator endpoint every client is pointed at.
pub const LOCALSTACK_ENDPOINT: &str = "http://localstack:4566";

/// Input stream the worker reads from.
pub const INPUT_STREAM_ARN: &str = "arn:aws:kinesis:us-east-1:000000000000:stream/input";

/// Partition key for every put record call. Shard routing is irrelevant with
/// a single manual record.
pub const PARTITION_KEY: &str = "foo";

/// Input queue the worker reads from.
pub const INPUT_QUEUE_URL: &str =
    "http://sqs.us-east-1.localhost.localstack.cloud:4566/000000000000/input";

use clap::Parser;
use job_submit::cli::JobArgs;

#[test]
fn test_parses_single_integer_argument() {
    let args = JobArgs::try_parse_from(["put-kinesis-job", "5"]).expect("valid argument");
    assert_eq!(args.sleep_duration_seconds, 5);
}

#[test]
fn test_parses_zero() {
    let args = JobArgs::try_parse_from(["send-sqs-job", "0"]).expect("valid argument");
    assert_eq!(args.sleep_duration_seconds, 0);
}

#[test]
fn test_parses_negative_duration() {
    // Nothing in the pipeline range-checks the duration; negatives parse
    // and reach the wire unchanged.
    let args = JobArgs::try_parse_from(["put-kinesis-job", "-15"]).expect("valid argument");
    assert_eq!(args.sleep_duration_seconds, -15);
}

#[test]
fn test_rejects_non_integer_argument() {
    // A bad argument must fail here, before any client is built, so the
    // process exits without performing a network call.
    let result = JobArgs::try_parse_from(["put-kinesis-job", "abc"]);
    assert!(result.is_err());
}

#[test]
fn test_rejects_missing_argument() {
    let result = JobArgs::try_parse_from(["send-sqs-job"]);
    assert!(result.is_err());
}

#[test]
fn test_rejects_extra_arguments() {
    let result = JobArgs::try_parse_from(["send-sqs-job", "5", "10"]);
    assert!(result.is_err());
}

#[test]
fn test_rejects_values_beyond_i64() {
    // Durations are carried as i64; anything wider fails at the argument
    // parser with a non-zero exit, same as any other unparseable input.
    let result = JobArgs::try_parse_from(["put-kinesis-job", "92233720368547758080"]);
    assert!(result.is_err());
}

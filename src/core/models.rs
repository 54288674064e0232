use serde::{Deserialize, Serialize};

/// The job body consumed by the worker under test.
///
/// Serializes to exactly `{"SleepDurationSeconds": <integer>}` — the key
/// casing the worker deserializes. The duration is carried as a signed 64-bit
/// integer and passed through without range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMessage {
    #[serde(rename = "SleepDurationSeconds")]
    pub sleep_duration_seconds: i64,
}

impl JobMessage {
    #[must_use]
    pub fn new(sleep_duration_seconds: i64) -> Self {
        Self {
            sleep_duration_seconds,
        }
    }
}

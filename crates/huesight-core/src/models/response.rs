use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StimulusPair;

/// One answered stimulus. Immutable once appended to the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub stimulus: StimulusPair,
    pub is_correct: bool,
    /// Written as `{secs, nanos}`. Whole milliseconds under the older
    /// `response_time_ms` key are still accepted.
    #[serde(alias = "response_time_ms", deserialize_with = "response_time::deserialize")]
    pub response_time: Duration,
    pub timestamp: DateTime<Utc>,
}

impl ResponseRecord {
    pub fn new(stimulus: StimulusPair, is_correct: bool, response_time: Duration) -> Self {
        Self {
            stimulus,
            is_correct,
            response_time,
            timestamp: Utc::now(),
        }
    }

    pub fn response_time_ms(&self) -> u64 {
        u64::try_from(self.response_time.as_millis()).unwrap_or(u64::MAX)
    }
}

mod response_time {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Millis(u64),
        Exact(Duration),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(match Wire::deserialize(d)? {
            Wire::Millis(ms) => Duration::from_millis(ms),
            Wire::Exact(duration) => duration,
        })
    }
}

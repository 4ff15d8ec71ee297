//! Elapsed time formatting.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes and seconds as shown on screen, each zero-padded to two digits.
///
/// Minutes are not wrapped at an hour, so long sessions show `"75:03"`.
///
/// # Example
///
/// ```rust
/// use geoquiz::timer::ElapsedDisplay;
/// use chrono::Duration;
///
/// let display = ElapsedDisplay::from_elapsed(Duration::seconds(125));
/// assert_eq!(display.to_string(), "02:05");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedDisplay {
    pub minutes: String,
    pub seconds: String,
}

impl Default for ElapsedDisplay {
    fn default() -> Self {
        Self {
            minutes: "00".to_string(),
            seconds: "00".to_string(),
        }
    }
}

impl ElapsedDisplay {
    /// Format a duration. Negative durations show as zero.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let total = elapsed.num_seconds().max(0);
        Self {
            minutes: format!("{:02}", total / 60),
            seconds: format!("{:02}", total % 60),
        }
    }

    /// Time elapsed from `start` to `now`.
    pub fn between(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_elapsed(now.signed_duration_since(start))
    }
}

impl fmt::Display for ElapsedDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_zero() {
        assert_eq!(ElapsedDisplay::default().to_string(), "00:00");
    }

    #[test]
    fn sub_second_remainders_are_floored() {
        let display = ElapsedDisplay::from_elapsed(Duration::milliseconds(59_999));
        assert_eq!(display.minutes, "00");
        assert_eq!(display.seconds, "59");
    }

    #[test]
    fn minutes_keep_counting_past_an_hour() {
        let display = ElapsedDisplay::from_elapsed(Duration::seconds(75 * 60 + 3));
        assert_eq!(display.to_string(), "75:03");
    }

    #[test]
    fn clock_skew_shows_zero() {
        let now = Utc::now();
        let display = ElapsedDisplay::between(now, now - Duration::seconds(5));
        assert_eq!(display, ElapsedDisplay::default());
    }
}

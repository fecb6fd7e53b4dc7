//! Audit timestamps.
//!
//! `createDate` / `modifiedDate` travel as plain JSON numbers counting
//! **milliseconds** since the Unix epoch (UTC). Integral floats such as
//! `1665014400000.0` are accepted on decode; output is always an integer.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Milliseconds since the Unix epoch, UTC.
///
/// Serialized transparently as a number, so `1_665_000_000_000` on the wire is
/// `Timestamp::from_millis(1_665_000_000_000)` in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Converts to a calendar time, or `None` if the value is outside chrono's range.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::number::whole(deserializer).map(Self)
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }
}

/// RFC 3339 with millisecond precision; out-of-range values print the raw number.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_rfc3339_millis() {
        let ts = Timestamp::from_millis(1_665_014_400_123);
        assert_eq!(ts.to_string(), "2022-10-06T00:00:00.123Z");
    }

    #[test]
    fn out_of_range_values_fall_back_to_raw_millis() {
        let ts = Timestamp::from_millis(i64::MAX);
        assert!(ts.to_datetime().is_none());
        assert_eq!(ts.to_string(), format!("{}ms", i64::MAX));
    }

    #[test]
    fn converts_from_chrono() {
        let dt = DateTime::from_timestamp_millis(42_000).expect("in range");
        assert_eq!(Timestamp::from(dt).as_millis(), 42_000);
    }

    #[test]
    fn decodes_integral_floats() {
        let ts: Timestamp = serde_json::from_str("1665014400000.0").expect("integral float");
        assert_eq!(ts, Timestamp::from_millis(1_665_014_400_000));
        assert_eq!(serde_json::to_string(&ts).expect("encode"), "1665014400000");
        assert!(serde_json::from_str::<Timestamp>("1665014400000.5").is_err());
    }

    #[test]
    fn now_is_after_epoch() {
        assert!(Timestamp::now() > Timestamp::from_millis(0));
    }
}

//! Timestamps encoded as (fractional) seconds since the Unix epoch.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Serialize a timestamp as epoch seconds.
///
/// Whole seconds are written as integers; otherwise millisecond precision is
/// kept as a fraction.
pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    let millis = value.timestamp_subsec_millis();
    if millis == 0 {
        serializer.serialize_i64(value.timestamp())
    } else {
        serializer.serialize_f64(value.timestamp() as f64 + f64::from(millis) / 1000.0)
    }
}

/// Deserialize a timestamp from epoch seconds.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    deserializer.deserialize_any(EpochVisitor)
}

struct EpochVisitor;

impl<'de> Visitor<'de> for EpochVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a timestamp in epoch seconds")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Utc.timestamp_opt(v, 0)
            .single()
            .ok_or_else(|| E::custom(format!("timestamp out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v).map_err(|_| E::custom(format!("timestamp out of range: {}", v)))?;
        self.visit_i64(secs)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        let millis = (v * 1000.0).round() as i64;
        Utc.timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| E::custom(format!("timestamp out of range: {}", v)))
    }

    // Some endpoints answer with ISO-8601 strings even for epoch members.
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        DateTime::parse_from_rfc3339(v)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(E::custom)
    }
}

/// Optional variant for `Option<DateTime<Utc>>` fields.
pub mod option {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    struct Wrapper(#[serde(with = "super")] DateTime<Utc>);

    /// Serialize an optional timestamp.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_some(&Wrapper(*dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<Wrapper>::deserialize(deserializer).map(|w| w.map(|Wrapper(dt)| dt))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Range {
        #[serde(rename = "StartTimestamp", with = "super")]
        start: DateTime<Utc>,
        #[serde(
            rename = "EndTimestamp",
            with = "super::option",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        end: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_serialize_whole_and_fractional_seconds() {
        let range = Range {
            start: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            end: Some(Utc.timestamp_millis_opt(1_700_000_000_250).unwrap()),
        };
        assert_eq!(
            serde_json::to_string(&range).unwrap(),
            r#"{"StartTimestamp":1700000000,"EndTimestamp":1700000000.25}"#
        );
    }

    #[test]
    fn test_skip_absent_option() {
        let range = Range {
            start: Utc.timestamp_opt(10, 0).unwrap(),
            end: None,
        };
        assert_eq!(serde_json::to_string(&range).unwrap(), r#"{"StartTimestamp":10}"#);
    }

    #[test]
    fn test_deserialize_number_forms() {
        let range: Range =
            serde_json::from_str(r#"{"StartTimestamp":1.5E9,"EndTimestamp":1500000000.123}"#)
                .unwrap();
        assert_eq!(range.start.timestamp(), 1_500_000_000);
        assert_eq!(range.end.unwrap().timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_deserialize_null_and_missing() {
        let range: Range = serde_json::from_str(r#"{"StartTimestamp":1,"EndTimestamp":null}"#).unwrap();
        assert!(range.end.is_none());
        let range: Range = serde_json::from_str(r#"{"StartTimestamp":1}"#).unwrap();
        assert!(range.end.is_none());
    }

    #[test]
    fn test_deserialize_iso_string() {
        let range: Range =
            serde_json::from_str(r#"{"StartTimestamp":"2020-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(range.start.timestamp(), 1_577_836_800);
    }
}
